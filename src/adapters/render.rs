use crate::app::actions::{ActionMenu, MenuEntry};
use crate::app::views::layout::Layout;
use crate::app::views::widgets::{Cell, ListView, Table, TableBody};
use crate::app::views::{Page, Screen};
use crate::core::stats::StatCard;
use crate::utils::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

pub fn render(screen: &Screen, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(screen)),
        OutputFormat::Csv => render_csv(screen),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(screen)?),
    }
}

pub fn render_list(list: &ListView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_list(&mut out, list);
            Ok(out)
        }
        OutputFormat::Csv => table_csv(&list.table),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(list)?),
    }
}

// ---- text ----

fn text_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Stacked { primary, secondary } => format!("{} / {}", primary, secondary),
        Cell::Person {
            avatar,
            name,
            detail,
        } => match detail {
            Some(detail) => format!("[{}] {} <{}>", avatar.initials, name, detail),
            None => format!("[{}] {}", avatar.initials, name),
        },
        Cell::Badge(badge) => format!("({})", badge.label),
        Cell::Date {
            text,
            calendar_icon,
            ..
        } => {
            if *calendar_icon {
                format!("📅 {}", text)
            } else {
                text.clone()
            }
        }
        Cell::Menu(_) => "⋯".to_string(),
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn write_table(out: &mut String, table: &Table) {
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.cells.iter().map(text_cell).collect())
        .collect();

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "{}", line(&table.headers));
    let _ = writeln!(
        out,
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-")
    );

    match &table.body {
        TableBody::Rows(_) => {
            for row in &rows {
                let _ = writeln!(out, "{}", line(row));
            }
        }
        TableBody::Empty(empty) => {
            let _ = writeln!(out, "  {}", empty.title);
            let _ = writeln!(out, "  {}", empty.hint);
        }
    }
}

fn write_list(out: &mut String, list: &ListView) {
    let toolbar = &list.toolbar;
    let search = if toolbar.query.is_empty() {
        toolbar.search_placeholder.clone()
    } else {
        toolbar.query.clone()
    };
    let _ = writeln!(
        out,
        "🔍 {}    [{}] [+ {}]",
        search, toolbar.filter_label, toolbar.add_label
    );
    let _ = writeln!(out);
    write_table(out, &list.table);
}

fn write_cards(out: &mut String, cards: &[StatCard]) {
    for card in cards {
        let mut line = format!("  {:<14} {:>4}", card.title, card.value);
        if let Some(subtitle) = &card.subtitle {
            let _ = write!(line, "  {}", subtitle);
        }
        if let Some(trend) = &card.trend {
            let _ = write!(line, "  {}", trend);
        }
        let _ = writeln!(out, "{}", line);
    }
}

fn write_layout(out: &mut String, layout: &Layout) {
    let nav: Vec<String> = layout
        .nav
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.title)
            } else {
                item.title.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "{}  |  {}  |  {}", layout.brand, nav.join("  "), layout.user_initials);
    let _ = writeln!(out, "{}", "=".repeat(72));
}

/// Menu entries as a text block, used when an action menu is opened.
pub fn render_menu(menu: &ActionMenu) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", menu.label);
    for entry in &menu.entries {
        match entry {
            MenuEntry::Item {
                label, destructive, ..
            } => {
                let marker = if *destructive { "!" } else { " " };
                let _ = writeln!(out, " {} {}", marker, label);
            }
            MenuEntry::Separator => {
                let _ = writeln!(out, "   ---");
            }
        }
    }
    out
}

pub fn render_text(screen: &Screen) -> String {
    let mut out = String::new();
    if let Some(layout) = &screen.layout {
        write_layout(&mut out, layout);
    }

    match &screen.page {
        Page::Dashboard(page) => {
            let _ = writeln!(out, "{}", page.title);
            let _ = writeln!(out, "{}", page.subtitle);
            let _ = writeln!(out);
            write_cards(&mut out, &page.cards);
            if let Some(live) = &page.live_cards {
                let _ = writeln!(out);
                let _ = writeln!(out, "  Calculé à partir des données :");
                write_cards(&mut out, live);
            }
            let _ = writeln!(out);
            let tabs: Vec<String> = page
                .tabs
                .iter()
                .map(|tab| {
                    if tab.active {
                        format!("[{}]", tab.label)
                    } else {
                        tab.label.clone()
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", tabs.join("  "));
            let _ = writeln!(out);
            write_list(&mut out, &page.content);
        }
        Page::Certifications { title, list } | Page::Collaborators { title, list } => {
            let _ = writeln!(out, "{}", title);
            let _ = writeln!(out);
            write_list(&mut out, list);
        }
        Page::Settings(page) => {
            let _ = writeln!(out, "{}", page.title);
            let _ = writeln!(out);
            let width = page
                .entries
                .iter()
                .map(|(key, _)| key.chars().count())
                .max()
                .unwrap_or(0);
            for (key, value) in &page.entries {
                let _ = writeln!(out, "  {} : {}", pad(key, width), value);
            }
        }
        Page::NotFound(page) => {
            let _ = writeln!(out, "{}", page.code);
            let _ = writeln!(out, "{}", page.title);
            let _ = writeln!(out, "{}", page.message);
            let _ = writeln!(out, "← {} ({})", page.back.label, page.back.to);
        }
    }
    out
}

// ---- csv ----

fn table_csv(table: &Table) -> Result<String> {
    let columns: Vec<usize> = (0..table.headers.len())
        .filter(|i| {
            table
                .rows()
                .first()
                .map(|row| !matches!(row.cells.get(*i), Some(Cell::Menu(_))))
                .unwrap_or(table.headers[*i] != "Actions")
        })
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns.iter().map(|i| table.headers[*i].as_str()))?;
    for row in table.rows() {
        writer.write_record(
            columns
                .iter()
                .map(|i| row.cells.get(*i).and_then(Cell::plain_text).unwrap_or_default()),
        )?;
    }
    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| DashboardError::from(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| DashboardError::ValidationError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

fn pairs_csv(header: [&str; 2], pairs: &[(String, String)]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for (key, value) in pairs {
        writer.write_record([key, value])?;
    }
    finish_csv(writer)
}

fn render_csv(screen: &Screen) -> Result<String> {
    match &screen.page {
        Page::Dashboard(page) => table_csv(&page.content.table),
        Page::Certifications { list, .. } | Page::Collaborators { list, .. } => {
            table_csv(&list.table)
        }
        Page::Settings(page) => pairs_csv(["setting", "value"], &page.entries),
        Page::NotFound(page) => pairs_csv(
            ["field", "value"],
            &[
                ("code".to_string(), page.code.clone()),
                ("path".to_string(), page.path.clone()),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sample_data;
    use crate::app::engine::{DashboardEngine, Settings, ViewOptions};
    use crate::domain::model::StatusSource;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn engine() -> DashboardEngine {
        DashboardEngine::new(
            sample_data::dataset(),
            Settings {
                today: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                debounce: Duration::from_millis(300),
                expiring_soon_days: 30,
                status_source: StatusSource::Stored,
                data_source: "test".to_string(),
            },
        )
    }

    fn options(query: &str) -> ViewOptions {
        ViewOptions {
            query: query.to_string(),
            ..ViewOptions::default()
        }
    }

    #[test]
    fn test_text_table_contains_rows() {
        let screen = engine().render("/certifications", &options("cloud"));
        let text = render_text(&screen);
        assert!(text.contains("[Certifications]"));
        assert!(text.contains("AWS Certified Solutions Architect / Amazon Web Services"));
        assert!(text.contains("(Expire dans 10 jours)"));
        assert!(!text.contains("ITIL"));
    }

    #[test]
    fn test_text_empty_state() {
        let screen = engine().render("/collaborators", &options("nobody"));
        let text = render_text(&screen);
        assert!(text.contains("Aucun collaborateur trouvé"));
        assert!(!text.contains("Sophie"));
    }

    #[test]
    fn test_csv_drops_action_column() {
        let screen = engine().render("/collaborators", &options("sophie"));
        let csv = render(&screen, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Collaborateur,Département,Poste,Certifications,Statut"
        );
        assert_eq!(lines[1], "Sophie Martin,IT,Développeur Senior,2,Actif");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_of_empty_list_keeps_header() {
        let screen = engine().render("/certifications", &options("nothing"));
        let csv = render(&screen, OutputFormat::Csv).unwrap();
        assert_eq!(
            csv.trim_end(),
            "Certification,Collaborateur,Catégorie,Date d'obtention,Date d'expiration,Statut"
        );
    }

    #[test]
    fn test_json_is_tagged_by_page() {
        let screen = engine().render("/settings", &ViewOptions::default());
        let json = render(&screen, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["page"]["page"], "settings");
        assert_eq!(value["path"], "/settings");
    }

    #[test]
    fn test_not_found_text() {
        let screen = engine().render("/nowhere", &ViewOptions::default());
        let text = render_text(&screen);
        assert!(text.starts_with("404\nPage introuvable"));
        assert!(text.contains("Retour à l'accueil (/)"));
    }

    #[test]
    fn test_menu_text() {
        let menu = ActionMenu::for_record(crate::domain::model::RecordKind::Certification, "1");
        let text = render_menu(&menu);
        assert!(text.contains("Renouveler"));
        assert!(text.contains(" ! Supprimer"));
    }
}
