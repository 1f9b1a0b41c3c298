use crate::app::actions::{self, RowAction};
use crate::app::views::dashboard::{self, Tab};
use crate::app::views::widgets::ListView;
use crate::app::views::{certifications, collaborators, layout, not_found, settings};
use crate::app::views::{Page, Screen};
use crate::core::integrity::report_inconsistencies;
use crate::core::router::Route;
use crate::core::stats::LiveSummary;
use crate::core::status::StatusClassifier;
use crate::domain::model::{Dataset, RecordKind, StatusSource};
use crate::domain::ports::{ConfigProvider, DataSource, RowActions};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use std::time::Duration;

/// Effective settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub today: NaiveDate,
    pub debounce: Duration,
    pub expiring_soon_days: i64,
    pub status_source: StatusSource,
    pub data_source: String,
}

impl Settings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C, data_source: String) -> Self {
        Self {
            today: config.today(),
            debounce: config.debounce(),
            expiring_soon_days: config.expiring_soon_days(),
            status_source: config.status_source(),
            data_source,
        }
    }

    pub fn classifier(&self) -> StatusClassifier {
        StatusClassifier::new(self.today, self.expiring_soon_days, self.status_source)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub query: String,
    pub tab: Tab,
    pub live_stats: bool,
}

pub struct DashboardEngine {
    dataset: Dataset,
    settings: Settings,
}

impl DashboardEngine {
    pub fn new(dataset: Dataset, settings: Settings) -> Self {
        Self { dataset, settings }
    }

    /// Loads and validates the data set. Denormalized-field disagreements are
    /// logged, broken references fail the load.
    pub async fn load<D, C>(source: &D, config: &C) -> Result<Self>
    where
        D: DataSource + ?Sized,
        C: ConfigProvider + ?Sized,
    {
        let description = source.describe();
        tracing::info!("🚀 Loading dashboard data from {}", description);

        let dataset = source.load().await?;
        dataset.validate()?;

        let inconsistencies = report_inconsistencies(&dataset);
        if inconsistencies > 0 {
            tracing::debug!("{} denormalized fields disagree with the data", inconsistencies);
        }

        tracing::info!(
            "✅ {} certifications, {} collaborators ready",
            dataset.certifications.len(),
            dataset.collaborators.len()
        );

        Ok(Self::new(dataset, Settings::from_config(config, description)))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn list_view(&self, kind: RecordKind, query: &str) -> ListView {
        match kind {
            RecordKind::Certification => certifications::list_view(
                &self.dataset.certifications,
                query,
                &self.settings.classifier(),
            ),
            RecordKind::Collaborator => collaborators::list_view(&self.dataset, query),
        }
    }

    pub fn render(&self, path: &str, options: &ViewOptions) -> Screen {
        let route = Route::resolve(path);
        tracing::debug!("Rendering {:?} for '{}'", route, path);

        let page = match &route {
            Route::Dashboard => {
                let kind = match options.tab {
                    Tab::Certifications => RecordKind::Certification,
                    Tab::Collaborators => RecordKind::Collaborator,
                };
                let live = options.live_stats.then(|| {
                    LiveSummary::compute(&self.dataset, &self.settings.classifier())
                        .cards(self.settings.expiring_soon_days)
                });
                Page::Dashboard(dashboard::page(
                    options.tab,
                    self.list_view(kind, &options.query),
                    live,
                ))
            }
            Route::Certifications => Page::Certifications {
                title: route.title().to_string(),
                list: self.list_view(RecordKind::Certification, &options.query),
            },
            Route::Collaborators => Page::Collaborators {
                title: route.title().to_string(),
                list: self.list_view(RecordKind::Collaborator, &options.query),
            },
            Route::Settings => Page::Settings(settings::page(&self.settings)),
            Route::NotFound(missing) => Page::NotFound(not_found::page(missing)),
        };

        let layout = match route {
            Route::NotFound(_) => None,
            ref known => Some(layout::layout(known.path())),
        };

        Screen {
            path: route.path().to_string(),
            layout,
            page,
        }
    }

    pub fn dispatch(
        &self,
        kind: RecordKind,
        id: &str,
        action: RowAction,
        handler: &dyn RowActions,
    ) -> Result<()> {
        actions::dispatch(&self.dataset, kind, id, action, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sample_data;

    fn engine(source: StatusSource) -> DashboardEngine {
        DashboardEngine::new(
            sample_data::dataset(),
            Settings {
                today: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                debounce: Duration::from_millis(300),
                expiring_soon_days: 30,
                status_source: source,
                data_source: "test".to_string(),
            },
        )
    }

    #[test]
    fn test_dashboard_defaults_to_certifications_tab() {
        let screen = engine(StatusSource::Stored).render("/", &ViewOptions::default());
        let Page::Dashboard(page) = &screen.page else {
            panic!("expected dashboard");
        };
        assert_eq!(page.title, "Tableau de bord");
        assert!(page.tabs[0].active);
        assert_eq!(page.content.table.headers[0], "Certification");
        assert!(page.live_cards.is_none());
        assert!(screen.layout.unwrap().nav[0].active);
    }

    #[test]
    fn test_dashboard_live_cards_on_request() {
        let options = ViewOptions {
            live_stats: true,
            tab: Tab::Collaborators,
            ..ViewOptions::default()
        };
        let screen = engine(StatusSource::Stored).render("/", &options);
        let Page::Dashboard(page) = &screen.page else {
            panic!("expected dashboard");
        };
        let live = page.live_cards.as_ref().unwrap();
        assert_eq!(live[0].value, "5");
        assert_eq!(live[3].value, "1");
        // fixed cards untouched
        assert_eq!(page.cards[1].value, "11");
        assert_eq!(page.content.table.headers[0], "Collaborateur");
    }

    #[test]
    fn test_unknown_route_renders_bare_not_found() {
        let screen = engine(StatusSource::Stored).render("/reports", &ViewOptions::default());
        assert!(screen.layout.is_none());
        assert!(matches!(&screen.page, Page::NotFound(p) if p.path == "/reports" && p.code == "404"));
        assert!(screen.list().is_none());
    }

    #[test]
    fn test_settings_page_lists_effective_values() {
        let screen = engine(StatusSource::Derived).render("/settings", &ViewOptions::default());
        let Page::Settings(page) = &screen.page else {
            panic!("expected settings");
        };
        assert!(page
            .entries
            .contains(&("Source du statut".to_string(), "derived".to_string())));
        assert!(page
            .entries
            .contains(&("Délai de recherche".to_string(), "300 ms".to_string())));
    }

    #[test]
    fn test_derived_status_changes_badges() {
        let mut stored = engine(StatusSource::Stored);
        let mut derived = engine(StatusSource::Derived);
        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        stored.settings.today = new_year;
        derived.settings.today = new_year;

        let label = |engine: &DashboardEngine| {
            let screen = engine.render("/certifications", &ViewOptions {
                query: "itil".to_string(),
                ..ViewOptions::default()
            });
            screen.list().unwrap().table.rows()[0].cells[5].plain_text().unwrap()
        };
        // ITIL is stored as active but expires on 2026-01-20
        assert_eq!(label(&stored), "Valide");
        assert_eq!(label(&derived), "Expire dans 19 jours");
    }
}
