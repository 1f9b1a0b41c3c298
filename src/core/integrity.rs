use crate::domain::model::Dataset;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::collections::HashSet;

impl Validate for Dataset {
    /// Hard invariants: unique non-empty ids, existing collaborator
    /// references, expiry strictly after issue.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for collaborator in &self.collaborators {
            validate_non_empty_string("collaborators.id", &collaborator.id)?;
            validate_non_empty_string("collaborators.name", &collaborator.name)?;
            if !seen.insert(collaborator.id.as_str()) {
                return Err(DashboardError::ValidationError {
                    message: format!("duplicate collaborator id '{}'", collaborator.id),
                });
            }
        }

        let mut seen = HashSet::new();
        for certification in &self.certifications {
            validate_non_empty_string("certifications.id", &certification.id)?;
            validate_non_empty_string("certifications.name", &certification.name)?;
            if !seen.insert(certification.id.as_str()) {
                return Err(DashboardError::ValidationError {
                    message: format!("duplicate certification id '{}'", certification.id),
                });
            }
            if self.collaborator(&certification.collaborator.id).is_none() {
                return Err(DashboardError::ValidationError {
                    message: format!(
                        "certification '{}' references unknown collaborator '{}'",
                        certification.id, certification.collaborator.id
                    ),
                });
            }
            if certification.expires_at <= certification.issued_at {
                return Err(DashboardError::ValidationError {
                    message: format!(
                        "certification '{}' expires on {} but was issued on {}",
                        certification.id, certification.expires_at, certification.issued_at
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Soft inconsistencies coming from denormalized fields. Logged, never fatal.
/// Returns how many were found.
pub fn report_inconsistencies(dataset: &Dataset) -> usize {
    let mut found = 0;

    for certification in &dataset.certifications {
        if let Some(owner) = dataset.collaborator(&certification.collaborator.id) {
            if owner.name != certification.collaborator.name {
                tracing::warn!(
                    "⚠️ Certification {} names its owner '{}' but collaborator {} is '{}'",
                    certification.id,
                    certification.collaborator.name,
                    owner.id,
                    owner.name
                );
                found += 1;
            }
        }
    }

    for (id, stored, derived) in dataset.count_mismatches() {
        tracing::debug!(
            "Collaborator {} declares {} certifications, data set holds {}",
            id,
            stored,
            derived
        );
        found += 1;
    }

    found
}
