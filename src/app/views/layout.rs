use crate::app::search_bar::DEFAULT_PLACEHOLDER;
use crate::core::router::Route;
use serde::Serialize;

pub const BRAND: &str = "CertifyHub";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub path: String,
    pub active: bool,
}

/// Sidebar and top bar around every page except not-found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub brand: String,
    pub menu_label: String,
    pub nav: Vec<NavItem>,
    pub header_search_placeholder: String,
    pub user_initials: String,
    pub logout_label: String,
}

pub fn layout(current_path: &str) -> Layout {
    let nav = Route::MENU
        .iter()
        .map(|route| NavItem {
            title: route.title().to_string(),
            path: route.path().to_string(),
            active: route.path() == current_path,
        })
        .collect();

    Layout {
        brand: BRAND.to_string(),
        menu_label: "Menu".to_string(),
        nav,
        header_search_placeholder: DEFAULT_PLACEHOLDER.to_string(),
        user_initials: "AD".to_string(),
        logout_label: "Déconnexion".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_entry_follows_path() {
        let layout = layout("/certifications");
        let active: Vec<&str> = layout
            .nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(active, vec!["Certifications"]);
        assert_eq!(layout.nav.len(), 4);
        assert_eq!(layout.nav[3].title, "Paramètres");
    }

    #[test]
    fn test_unknown_path_has_no_active_entry() {
        assert!(layout("/nope").nav.iter().all(|item| !item.active));
    }
}
