use crate::domain::model::Dataset;
use crate::domain::ports::DataSource;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::validate_file_extension;
use async_trait::async_trait;
use std::path::PathBuf;

pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Reads both collections from a `.json` or `.toml` file shaped like
/// `{ "certifications": [...], "collaborators": [...] }`.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(&self, content: &str) -> Result<Dataset> {
        let display = self.path.display().to_string();
        validate_file_extension("data.path", &display, &SUPPORTED_EXTENSIONS)?;

        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(content).map_err(|e| DashboardError::TomlError {
                source_name: display,
                message: e.to_string(),
            }),
            _ => Ok(serde_json::from_str(content)?),
        }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn load(&self) -> Result<Dataset> {
        tracing::debug!("Reading data file {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let dataset = self.parse(&content)?;
        tracing::info!(
            "📁 Loaded {} certifications and {} collaborators from {}",
            dataset.certifications.len(),
            dataset.collaborators.len(),
            self.path.display()
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
