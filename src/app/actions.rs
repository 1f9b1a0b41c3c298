use crate::domain::model::{Dataset, RecordKind};
use crate::domain::ports::RowActions;
use crate::utils::error::{DashboardError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    View,
    Edit,
    Renew,
    #[cfg_attr(feature = "cli", value(name = "manage"))]
    ManageCertifications,
    Delete,
}

impl RowAction {
    /// Actions offered in the row menu of `kind`, in menu order.
    pub fn available_for(kind: RecordKind) -> [RowAction; 4] {
        match kind {
            RecordKind::Certification => [
                RowAction::View,
                RowAction::Edit,
                RowAction::Renew,
                RowAction::Delete,
            ],
            RecordKind::Collaborator => [
                RowAction::View,
                RowAction::Edit,
                RowAction::ManageCertifications,
                RowAction::Delete,
            ],
        }
    }

    pub fn label(self, kind: RecordKind) -> &'static str {
        match (self, kind) {
            (RowAction::View, RecordKind::Certification) => "Voir les détails",
            (RowAction::View, RecordKind::Collaborator) => "Voir le profil",
            (RowAction::Edit, _) => "Modifier",
            (RowAction::Renew, _) => "Renouveler",
            (RowAction::ManageCertifications, _) => "Gérer les certifications",
            (RowAction::Delete, _) => "Supprimer",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Renew => "renew",
            RowAction::ManageCertifications => "manage",
            RowAction::Delete => "delete",
        };
        f.write_str(s)
    }
}

impl FromStr for RowAction {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(RowAction::View),
            "edit" => Ok(RowAction::Edit),
            "renew" => Ok(RowAction::Renew),
            "manage" | "manage-certifications" => Ok(RowAction::ManageCertifications),
            "delete" => Ok(RowAction::Delete),
            other => Err(DashboardError::InvalidConfigValueError {
                field: "action".to_string(),
                value: other.to_string(),
                reason: "Expected one of view, edit, renew, manage, delete".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Item {
        action: RowAction,
        label: String,
        destructive: bool,
    },
    Separator,
}

/// Per-row dropdown: label, entries, and the record it acts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionMenu {
    pub label: String,
    pub record_kind: RecordKind,
    pub record_id: String,
    pub entries: Vec<MenuEntry>,
}

impl ActionMenu {
    pub fn for_record(kind: RecordKind, id: &str) -> Self {
        let mut entries = Vec::new();
        for action in RowAction::available_for(kind) {
            let destructive = action == RowAction::Delete;
            if destructive {
                entries.push(MenuEntry::Separator);
            }
            entries.push(MenuEntry::Item {
                action,
                label: action.label(kind).to_string(),
                destructive,
            });
        }
        Self {
            label: "Actions".to_string(),
            record_kind: kind,
            record_id: id.to_string(),
            entries,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item { label, .. } => Some(label.as_str()),
                MenuEntry::Separator => None,
            })
            .collect()
    }

    /// Selecting an entry forwards to the handler; the menu itself holds no state.
    pub fn select(&self, action: RowAction, handler: &dyn RowActions) -> Result<()> {
        invoke(self.record_kind, &self.record_id, action, handler)
    }
}

/// The shipped handler: every action is accepted and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActions;

impl RowActions for NoopActions {}

fn invoke(kind: RecordKind, id: &str, action: RowAction, handler: &dyn RowActions) -> Result<()> {
    if !RowAction::available_for(kind).contains(&action) {
        return Err(DashboardError::ValidationError {
            message: format!("action '{}' is not offered for {} rows", action, kind),
        });
    }

    tracing::debug!("Row action {} on {} {}", action, kind, id);
    match action {
        RowAction::View => handler.view(kind, id),
        RowAction::Edit => handler.edit(kind, id),
        RowAction::Renew => handler.renew(id),
        RowAction::ManageCertifications => handler.manage_certifications(id),
        RowAction::Delete => handler.delete(kind, id),
    }
    Ok(())
}

/// Looks up the record, then invokes `action` on it.
pub fn dispatch(
    dataset: &Dataset,
    kind: RecordKind,
    id: &str,
    action: RowAction,
    handler: &dyn RowActions,
) -> Result<()> {
    let exists = match kind {
        RecordKind::Certification => dataset.certification(id).is_some(),
        RecordKind::Collaborator => dataset.collaborator(id).is_some(),
    };
    if !exists {
        return Err(DashboardError::UnknownRecord {
            kind: kind.to_string(),
            id: id.to_string(),
        });
    }
    ActionMenu::for_record(kind, id).select(action, handler)
}
