pub mod debounce;
pub mod integrity;
pub mod router;
pub mod search;
pub mod stats;
pub mod status;

pub use crate::domain::model::{Certification, Collaborator, Dataset};
pub use crate::domain::ports::{ConfigProvider, DataSource, RowActions};
pub use crate::utils::error::Result;
