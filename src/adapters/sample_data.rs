use crate::domain::model::{
    Certification, CertificationStatus, Collaborator, CollaboratorRef, CollaboratorStatus,
    Dataset,
};
use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // literal fixture dates, all valid
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn certification(
    id: &str,
    name: &str,
    provider: &str,
    category: &str,
    status: CertificationStatus,
    issued_at: NaiveDate,
    expires_at: NaiveDate,
    owner: (&str, &str),
) -> Certification {
    Certification {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        category: category.to_string(),
        status,
        issued_at,
        expires_at,
        collaborator: CollaboratorRef {
            id: owner.0.to_string(),
            name: owner.1.to_string(),
        },
    }
}

fn collaborator(
    id: &str,
    name: &str,
    email: &str,
    department: &str,
    position: &str,
    status: CollaboratorStatus,
    certification_count: u32,
) -> Collaborator {
    Collaborator {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        status,
        certification_count,
    }
}

pub fn certifications() -> Vec<Certification> {
    use CertificationStatus::*;
    vec![
        certification(
            "1",
            "AWS Certified Solutions Architect",
            "Amazon Web Services",
            "Cloud",
            Active,
            date(2023, 5, 15),
            date(2026, 5, 15),
            ("1", "Sophie Martin"),
        ),
        certification(
            "2",
            "Microsoft Certified: Azure Developer",
            "Microsoft",
            "Cloud",
            ExpiringSoon,
            date(2022, 7, 10),
            date(2024, 7, 10),
            ("5", "Chloé Leroy"),
        ),
        certification(
            "3",
            "Project Management Professional (PMP)",
            "Project Management Institute",
            "Management",
            Active,
            date(2022, 2, 28),
            date(2025, 2, 28),
            ("3", "Emma Bernard"),
        ),
        certification(
            "4",
            "Certified ScrumMaster (CSM)",
            "Scrum Alliance",
            "Agile",
            Expired,
            date(2021, 11, 5),
            date(2023, 11, 5),
            ("1", "Sophie Martin"),
        ),
        certification(
            "5",
            "ITIL Foundation",
            "Axelos",
            "IT Service Management",
            Active,
            date(2023, 1, 20),
            date(2026, 1, 20),
            ("5", "Chloé Leroy"),
        ),
    ]
}

pub fn collaborators() -> Vec<Collaborator> {
    use CollaboratorStatus::*;
    vec![
        collaborator(
            "1",
            "Sophie Martin",
            "sophie.martin@exemple.fr",
            "IT",
            "Développeur Senior",
            Active,
            3,
        ),
        collaborator(
            "2",
            "Thomas Dubois",
            "thomas.dubois@exemple.fr",
            "Ressources Humaines",
            "Recruteur",
            Active,
            1,
        ),
        collaborator(
            "3",
            "Emma Bernard",
            "emma.bernard@exemple.fr",
            "Marketing",
            "Chef de Projet",
            Active,
            2,
        ),
        collaborator(
            "4",
            "Lucas Petit",
            "lucas.petit@exemple.fr",
            "Finance",
            "Analyste Financier",
            Inactive,
            0,
        ),
        collaborator(
            "5",
            "Chloé Leroy",
            "chloe.leroy@exemple.fr",
            "IT",
            "Architecte Solution",
            Active,
            5,
        ),
    ]
}

pub fn dataset() -> Dataset {
    Dataset {
        certifications: certifications(),
        collaborators: collaborators(),
    }
}

/// Built-in demonstration data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataSource;

#[async_trait]
impl DataSource for SampleDataSource {
    async fn load(&self) -> Result<Dataset> {
        Ok(dataset())
    }

    fn describe(&self) -> String {
        "données d'exemple intégrées".to_string()
    }
}
