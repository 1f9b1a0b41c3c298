use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "path", rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Collaborators,
    Certifications,
    Settings,
    NotFound(String),
}

impl Route {
    /// Navigable routes, in sidebar order.
    pub const MENU: [Route; 4] = [
        Route::Dashboard,
        Route::Collaborators,
        Route::Certifications,
        Route::Settings,
    ];

    /// Exact match on the path, ignoring a trailing slash and any query or
    /// fragment. Everything else falls through to `NotFound`.
    pub fn resolve(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/collaborators" => Route::Collaborators,
            "/certifications" => Route::Certifications,
            "/settings" => Route::Settings,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Collaborators => "/collaborators",
            Route::Certifications => "/certifications",
            Route::Settings => "/settings",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Tableau de bord",
            Route::Collaborators => "Collaborateurs",
            Route::Certifications => "Certifications",
            Route::Settings => "Paramètres",
            Route::NotFound(_) => "Page introuvable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(Route::resolve("/"), Route::Dashboard);
        assert_eq!(Route::resolve(""), Route::Dashboard);
        assert_eq!(Route::resolve("/collaborators"), Route::Collaborators);
        assert_eq!(Route::resolve("/certifications/"), Route::Certifications);
        assert_eq!(Route::resolve("/settings?tab=general"), Route::Settings);
    }

    #[test]
    fn test_unknown_routes_keep_their_path() {
        assert_eq!(
            Route::resolve("/reports"),
            Route::NotFound("/reports".to_string())
        );
        assert_eq!(
            Route::resolve("/certifications/1"),
            Route::NotFound("/certifications/1".to_string())
        );
        assert_eq!(Route::resolve("/reports").path(), "/reports");
    }

    #[test]
    fn test_menu_paths_round_trip() {
        for route in Route::MENU {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }
}
