use crate::app::engine::Settings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsPage {
    pub title: String,
    pub entries: Vec<(String, String)>,
}

pub fn page(settings: &Settings) -> SettingsPage {
    let entries = vec![
        ("Date du jour", settings.today.format("%Y-%m-%d").to_string()),
        (
            "Délai de recherche",
            format!("{} ms", settings.debounce.as_millis()),
        ),
        (
            "Seuil « à renouveler »",
            format!("{} jours", settings.expiring_soon_days),
        ),
        ("Source du statut", settings.status_source.to_string()),
        ("Données", settings.data_source.clone()),
    ];

    SettingsPage {
        title: "Paramètres".to_string(),
        entries: entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    }
}
