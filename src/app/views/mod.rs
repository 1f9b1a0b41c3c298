pub mod certifications;
pub mod collaborators;
pub mod dashboard;
pub mod format;
pub mod layout;
pub mod not_found;
pub mod settings;
pub mod widgets;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Dashboard(dashboard::DashboardPage),
    Certifications { title: String, list: widgets::ListView },
    Collaborators { title: String, list: widgets::ListView },
    Settings(settings::SettingsPage),
    NotFound(not_found::NotFoundPage),
}

/// Everything shown for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub path: String,
    /// Absent on the not-found page, which renders bare.
    pub layout: Option<layout::Layout>,
    pub page: Page,
}

impl Screen {
    /// The list shown on this screen, if any.
    pub fn list(&self) -> Option<&widgets::ListView> {
        match &self.page {
            Page::Dashboard(dashboard) => Some(&dashboard.content),
            Page::Certifications { list, .. } | Page::Collaborators { list, .. } => Some(list),
            Page::Settings(_) | Page::NotFound(_) => None,
        }
    }
}
