use crate::domain::model::{Dataset, RecordKind, StatusSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Where the two collections come from.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self) -> Result<Dataset>;

    /// Short human-readable description, shown on the settings page.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn today(&self) -> NaiveDate;
    fn debounce(&self) -> Duration;
    fn expiring_soon_days(&self) -> i64;
    fn status_source(&self) -> StatusSource;
    fn data_path(&self) -> Option<&str>;
}

/// Row menu capabilities. Every entry defaults to doing nothing; a mutation
/// layer can override them without touching the views.
pub trait RowActions: Send + Sync {
    fn view(&self, _kind: RecordKind, _id: &str) {}
    fn edit(&self, _kind: RecordKind, _id: &str) {}
    fn renew(&self, _certification_id: &str) {}
    fn manage_certifications(&self, _collaborator_id: &str) {}
    fn delete(&self, _kind: RecordKind, _id: &str) {}
}
