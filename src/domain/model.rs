use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle bucket of a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CertificationStatus::Active => "active",
            CertificationStatus::ExpiringSoon => "expiring-soon",
            CertificationStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollaboratorStatus {
    Active,
    Inactive,
}

/// Which status drives the certification badge: the value stored on the
/// record, or the bucket recomputed from `expires_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSource {
    #[default]
    Stored,
    Derived,
}

impl fmt::Display for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusSource::Stored => f.write_str("stored"),
            StatusSource::Derived => f.write_str("derived"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Certification,
    Collaborator,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Certification => f.write_str("certification"),
            RecordKind::Collaborator => f.write_str("collaborator"),
        }
    }
}

/// Denormalized pointer from a certification to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub category: String,
    pub status: CertificationStatus,
    pub issued_at: NaiveDate,
    pub expires_at: NaiveDate,
    pub collaborator: CollaboratorRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub status: CollaboratorStatus,
    /// Count as recorded with the collaborator. Not kept in sync with the
    /// certification set; see `Dataset::certification_count`.
    #[serde(default)]
    pub certification_count: u32,
}

impl Collaborator {
    /// First letter of each name part, e.g. "Chloé Leroy" -> "CL".
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Both collections, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub certifications: Vec<Certification>,
    pub collaborators: Vec<Collaborator>,
}

impl Dataset {
    pub fn collaborator(&self, id: &str) -> Option<&Collaborator> {
        self.collaborators.iter().find(|c| c.id == id)
    }

    pub fn certification(&self, id: &str) -> Option<&Certification> {
        self.certifications.iter().find(|c| c.id == id)
    }

    /// Number of certifications referencing the collaborator, derived from the
    /// certification set at read time.
    pub fn certification_count(&self, collaborator_id: &str) -> usize {
        self.certifications
            .iter()
            .filter(|c| c.collaborator.id == collaborator_id)
            .count()
    }

    /// Collaborators whose stored count disagrees with the derived one,
    /// as `(id, stored, derived)`.
    pub fn count_mismatches(&self) -> Vec<(&str, u32, usize)> {
        self.collaborators
            .iter()
            .filter_map(|c| {
                let derived = self.certification_count(&c.id);
                (derived != c.certification_count as usize)
                    .then_some((c.id.as_str(), c.certification_count, derived))
            })
            .collect()
    }
}
