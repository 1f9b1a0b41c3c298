use crate::app::actions::ActionMenu;
use crate::app::views::format::format_date;
use crate::app::views::widgets::{Avatar, Badge, Cell, ListView, Row, Table, Tone, Toolbar};
use crate::core::search;
use crate::core::status::StatusClassifier;
use crate::domain::model::{initials, Certification, CertificationStatus, RecordKind};

pub const SEARCH_PLACEHOLDER: &str = "Rechercher une certification...";
pub const HEADERS: [&str; 7] = [
    "Certification",
    "Collaborateur",
    "Catégorie",
    "Date d'obtention",
    "Date d'expiration",
    "Statut",
    "Actions",
];
pub const EMPTY_TITLE: &str = "Aucune certification trouvée";
pub const EMPTY_HINT: &str =
    "Essayez de modifier votre recherche ou d'ajouter une nouvelle certification";

fn status_tone(status: CertificationStatus) -> Tone {
    match status {
        CertificationStatus::Active => Tone::Success,
        CertificationStatus::ExpiringSoon => Tone::Warning,
        CertificationStatus::Expired => Tone::Danger,
    }
}

fn row(certification: &Certification, classifier: &StatusClassifier) -> Row {
    let status = classifier.classify(certification);
    let expired = status.displayed == CertificationStatus::Expired;
    let owner = &certification.collaborator;

    Row {
        key: certification.id.clone(),
        cells: vec![
            Cell::Stacked {
                primary: certification.name.clone(),
                secondary: certification.provider.clone(),
            },
            Cell::Person {
                avatar: Avatar {
                    initials: initials(&owner.name),
                    alt: owner.name.clone(),
                },
                name: owner.name.clone(),
                detail: None,
            },
            Cell::Badge(Badge::new(certification.category.clone(), Tone::Outline)),
            Cell::Text(format_date(certification.issued_at)),
            Cell::Date {
                text: format_date(certification.expires_at),
                calendar_icon: !expired,
                muted: expired,
            },
            Cell::Badge(Badge::new(status.label, status_tone(status.displayed))),
            Cell::Menu(ActionMenu::for_record(
                RecordKind::Certification,
                &certification.id,
            )),
        ],
    }
}

/// The certification list for `query`, recomputed from the full collection.
pub fn list_view(
    certifications: &[Certification],
    query: &str,
    classifier: &StatusClassifier,
) -> ListView {
    let rows = search::filter(certifications, query)
        .into_iter()
        .map(|c| row(c, classifier))
        .collect();

    ListView {
        toolbar: Toolbar {
            search_placeholder: SEARCH_PLACEHOLDER.to_string(),
            query: query.to_string(),
            filter_label: "Filtrer".to_string(),
            add_label: "Ajouter une certification".to_string(),
        },
        table: Table::new(&HEADERS, rows, EMPTY_TITLE, EMPTY_HINT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sample_data;
    use crate::domain::model::StatusSource;
    use chrono::NaiveDate;

    fn classifier(y: i32, m: u32, d: u32) -> StatusClassifier {
        StatusClassifier::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            30,
            StatusSource::Stored,
        )
    }

    fn status_cell(row: &Row) -> &Badge {
        match &row.cells[5] {
            Cell::Badge(badge) => badge,
            other => panic!("unexpected status cell {:?}", other),
        }
    }

    #[test]
    fn test_cloud_query_keeps_two_rows() {
        let data = sample_data::dataset();
        let view = list_view(&data.certifications, "Cloud", &classifier(2024, 6, 30));
        let keys: Vec<&str> = view.table.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2"]);
        assert_eq!(view.toolbar.query, "Cloud");
    }

    #[test]
    fn test_no_match_renders_empty_state() {
        let data = sample_data::dataset();
        let view = list_view(&data.certifications, "kubernetes", &classifier(2024, 6, 30));
        assert!(view.table.rows().is_empty());
        let empty = view.table.empty_state().unwrap();
        assert_eq!(empty.title, "Aucune certification trouvée");
        assert_eq!(empty.col_span, 7);
    }

    #[test]
    fn test_status_badges() {
        let data = sample_data::dataset();
        let view = list_view(&data.certifications, "", &classifier(2024, 6, 30));
        let rows = view.table.rows();

        assert_eq!(status_cell(&rows[0]), &Badge::new("Valide", Tone::Success));
        assert_eq!(
            status_cell(&rows[1]),
            &Badge::new("Expire dans 10 jours", Tone::Warning)
        );
        assert_eq!(status_cell(&rows[3]), &Badge::new("Expirée", Tone::Danger));
    }

    #[test]
    fn test_expired_row_has_muted_expiry_date() {
        let data = sample_data::dataset();
        let view = list_view(&data.certifications, "scrum", &classifier(2024, 6, 30));
        let row = &view.table.rows()[0];
        assert_eq!(
            row.cells[4],
            Cell::Date {
                text: "5 nov. 2023".to_string(),
                calendar_icon: false,
                muted: true,
            }
        );
        assert!(matches!(&row.cells[1], Cell::Person { avatar, .. } if avatar.initials == "SM"));
    }
}
