use crate::app::actions::ActionMenu;
use crate::app::views::widgets::{Avatar, Badge, Cell, ListView, Row, Table, Tone, Toolbar};
use crate::core::search;
use crate::domain::model::{Collaborator, CollaboratorStatus, Dataset, RecordKind};

pub const SEARCH_PLACEHOLDER: &str = "Rechercher un collaborateur...";
pub const HEADERS: [&str; 6] = [
    "Collaborateur",
    "Département",
    "Poste",
    "Certifications",
    "Statut",
    "Actions",
];
pub const EMPTY_TITLE: &str = "Aucun collaborateur trouvé";
pub const EMPTY_HINT: &str =
    "Essayez de modifier votre recherche ou d'ajouter un nouveau collaborateur";

fn row(collaborator: &Collaborator, certification_count: usize) -> Row {
    let count_tone = if certification_count > 0 {
        Tone::Default
    } else {
        Tone::Muted
    };
    let status = match collaborator.status {
        CollaboratorStatus::Active => Badge::new("Actif", Tone::Success),
        CollaboratorStatus::Inactive => Badge::new("Inactif", Tone::Muted),
    };

    Row {
        key: collaborator.id.clone(),
        cells: vec![
            Cell::Person {
                avatar: Avatar {
                    initials: collaborator.initials(),
                    alt: collaborator.name.clone(),
                },
                name: collaborator.name.clone(),
                detail: Some(collaborator.email.clone()),
            },
            Cell::Text(collaborator.department.clone()),
            Cell::Text(collaborator.position.clone()),
            Cell::Badge(Badge::new(certification_count.to_string(), count_tone)),
            Cell::Badge(status),
            Cell::Menu(ActionMenu::for_record(
                RecordKind::Collaborator,
                &collaborator.id,
            )),
        ],
    }
}

/// The collaborator list for `query`. The certification count column is
/// derived from the data set, not read from the stored field.
pub fn list_view(dataset: &Dataset, query: &str) -> ListView {
    let rows = search::filter(&dataset.collaborators, query)
        .into_iter()
        .map(|c| row(c, dataset.certification_count(&c.id)))
        .collect();

    ListView {
        toolbar: Toolbar {
            search_placeholder: SEARCH_PLACEHOLDER.to_string(),
            query: query.to_string(),
            filter_label: "Filtrer".to_string(),
            add_label: "Ajouter un collaborateur".to_string(),
        },
        table: Table::new(&HEADERS, rows, EMPTY_TITLE, EMPTY_HINT),
    }
}
