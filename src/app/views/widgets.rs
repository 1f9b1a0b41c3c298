//! View-model building blocks. Views produce these values; renderers in
//! `adapters::render` turn them into text, CSV or JSON.

use crate::app::actions::ActionMenu;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Default,
    Outline,
    Success,
    Warning,
    Danger,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Avatar {
    pub initials: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Text(String),
    /// Title line with a secondary line underneath.
    Stacked { primary: String, secondary: String },
    Person {
        avatar: Avatar,
        name: String,
        detail: Option<String>,
    },
    Badge(Badge),
    Date {
        text: String,
        calendar_icon: bool,
        muted: bool,
    },
    Menu(ActionMenu),
}

impl Cell {
    /// Plain text of the cell, as used by CSV export. Menus have none.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Cell::Text(text) => Some(text.clone()),
            Cell::Stacked { primary, secondary } => Some(format!("{} ({})", primary, secondary)),
            Cell::Person { name, .. } => Some(name.clone()),
            Cell::Badge(badge) => Some(badge.label.clone()),
            Cell::Date { text, .. } => Some(text.clone()),
            Cell::Menu(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub key: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub hint: String,
    pub col_span: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TableBody {
    Rows(Vec<Row>),
    Empty(EmptyState),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub body: TableBody,
}

impl Table {
    /// Rows, or the empty-state placeholder when there are none.
    pub fn new(headers: &[&str], rows: Vec<Row>, empty_title: &str, empty_hint: &str) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let body = if rows.is_empty() {
            TableBody::Empty(EmptyState {
                title: empty_title.to_string(),
                hint: empty_hint.to_string(),
                col_span: headers.len(),
            })
        } else {
            TableBody::Rows(rows)
        };
        Self { headers, body }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Empty(_) => &[],
        }
    }

    pub fn empty_state(&self) -> Option<&EmptyState> {
        match &self.body {
            TableBody::Empty(state) => Some(state),
            TableBody::Rows(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolbar {
    pub search_placeholder: String,
    pub query: String,
    pub filter_label: String,
    pub add_label: String,
}

/// A searchable list: toolbar plus table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub toolbar: Toolbar,
    pub table: Table,
}
