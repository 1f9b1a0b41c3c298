use crate::core::status::StatusClassifier;
use crate::domain::model::{CertificationStatus, Dataset};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Default,
    Primary,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trend {
    pub value: i32,
    pub is_positive: bool,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, word) = if self.is_positive {
            ('+', "hausse")
        } else {
            ('-', "baisse")
        };
        write!(f, "{}{}% {}", sign, self.value.abs(), word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub variant: CardVariant,
    pub trend: Option<Trend>,
    pub subtitle: Option<String>,
}

impl StatCard {
    fn new(title: &str, value: impl ToString, variant: CardVariant) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            variant,
            trend: None,
            subtitle: None,
        }
    }

    fn with_trend(mut self, value: i32, is_positive: bool) -> Self {
        self.trend = Some(Trend { value, is_positive });
        self
    }

    fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }
}

/// The dashboard header cards. These are fixed figures, not aggregated from
/// the data set.
pub fn dashboard_cards() -> Vec<StatCard> {
    vec![
        StatCard::new("Collaborateurs", 5, CardVariant::Default)
            .with_trend(20, true)
            .with_subtitle("Total des collaborateurs"),
        StatCard::new("Certifications", 11, CardVariant::Primary)
            .with_trend(15, true)
            .with_subtitle("Certifications actives"),
        StatCard::new("À renouveler", 1, CardVariant::Warning)
            .with_subtitle("Expirent dans 30 jours"),
        StatCard::new("Expirées", 2, CardVariant::Danger).with_subtitle("Nécessitent une action"),
    ]
}

/// The same four figures computed from the data with date-derived buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiveSummary {
    pub collaborators: usize,
    pub active_certifications: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl LiveSummary {
    pub fn compute(dataset: &Dataset, classifier: &StatusClassifier) -> Self {
        let mut summary = Self {
            collaborators: dataset.collaborators.len(),
            active_certifications: 0,
            expiring_soon: 0,
            expired: 0,
        };
        for certification in &dataset.certifications {
            match classifier.classify(certification).derived {
                CertificationStatus::Active => summary.active_certifications += 1,
                CertificationStatus::ExpiringSoon => {
                    summary.active_certifications += 1;
                    summary.expiring_soon += 1;
                }
                CertificationStatus::Expired => summary.expired += 1,
            }
        }
        summary
    }

    pub fn cards(&self, expiring_soon_days: i64) -> Vec<StatCard> {
        vec![
            StatCard::new("Collaborateurs", self.collaborators, CardVariant::Default)
                .with_subtitle("Total des collaborateurs"),
            StatCard::new(
                "Certifications",
                self.active_certifications,
                CardVariant::Primary,
            )
            .with_subtitle("Certifications actives"),
            StatCard {
                subtitle: Some(format!("Expirent dans {} jours", expiring_soon_days)),
                ..StatCard::new("À renouveler", self.expiring_soon, CardVariant::Warning)
            },
            StatCard::new("Expirées", self.expired, CardVariant::Danger)
                .with_subtitle("Nécessitent une action"),
        ]
    }
}
