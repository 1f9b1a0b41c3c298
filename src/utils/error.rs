use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error in {source_name}: {message}")]
    TomlError { source_name: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("No {kind} with id '{id}'")]
    UnknownRecord { kind: String, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::IoError(_) => ErrorCategory::Io,
            DashboardError::SerializationError(_)
            | DashboardError::CsvError(_)
            | DashboardError::ValidationError { .. } => ErrorCategory::Data,
            DashboardError::TomlError { .. }
            | DashboardError::ConfigError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::UnknownRecord { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::IoError(e) => format!("Impossible de lire un fichier : {}", e),
            DashboardError::SerializationError(e) => {
                format!("Le fichier de données est invalide : {}", e)
            }
            DashboardError::CsvError(e) => format!("Export CSV impossible : {}", e),
            DashboardError::TomlError { source_name, .. } => {
                format!("Le fichier {} n'est pas un TOML valide", source_name)
            }
            DashboardError::ConfigError { message } => format!("Configuration : {}", message),
            DashboardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Valeur invalide pour {} : {}", field, reason)
            }
            DashboardError::ValidationError { message } => {
                format!("Données incohérentes : {}", message)
            }
            DashboardError::UnknownRecord { kind, id } => {
                format!("Aucun élément {} avec l'identifiant {}", kind, id)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Data => {
                "Check dates (YYYY-MM-DD), ids and collaborator references in the data file"
            }
            ErrorCategory::Configuration => {
                "Check certify-hub.toml and command line overrides (see --help)"
            }
            ErrorCategory::Lookup => "List the records with `show` to find a valid id",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
