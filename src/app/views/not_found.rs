use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub path: String,
    pub code: String,
    pub title: String,
    pub message: String,
    pub back: Link,
}

/// Static 404 page. Logs the path the user tried to reach.
pub fn page(path: &str) -> NotFoundPage {
    tracing::error!(
        "404 Error: User attempted to access non-existent route: {}",
        path
    );

    NotFoundPage {
        path: path.to_string(),
        code: "404".to_string(),
        title: "Page introuvable".to_string(),
        message: "Désolé, la page que vous recherchez n'existe pas ou a été déplacée."
            .to_string(),
        back: Link {
            label: "Retour à l'accueil".to_string(),
            to: "/".to_string(),
        },
    }
}
