pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileDataSource, SampleDataSource};
pub use app::engine::{DashboardEngine, Settings, ViewOptions};
pub use config::DashboardConfig;
pub use utils::error::{DashboardError, Result};
