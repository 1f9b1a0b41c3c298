use crate::app::views::widgets::ListView;
use crate::core::stats::{dashboard_cards, StatCard};
use serde::Serialize;
use std::fmt;

pub const TITLE: &str = "Tableau de bord";
pub const SUBTITLE: &str = "Consultez et gérez les certifications de vos collaborateurs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Certifications,
    Collaborators,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Certifications => "Certifications",
            Tab::Collaborators => "Collaborateurs",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Certifications => f.write_str("certifications"),
            Tab::Collaborators => f.write_str("collaborators"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabItem {
    pub value: Tab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardPage {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<StatCard>,
    /// Figures computed from the data, only when asked for.
    pub live_cards: Option<Vec<StatCard>>,
    pub tabs: Vec<TabItem>,
    /// Content of the active tab.
    pub content: ListView,
}

pub fn page(active: Tab, content: ListView, live_cards: Option<Vec<StatCard>>) -> DashboardPage {
    let tabs = [Tab::Certifications, Tab::Collaborators]
        .into_iter()
        .map(|value| TabItem {
            value,
            label: value.label().to_string(),
            active: value == active,
        })
        .collect();

    DashboardPage {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        cards: dashboard_cards(),
        live_cards,
        tabs,
        content,
    }
}
