// Adapters layer: concrete data sources and output renderers.

pub mod file_source;
pub mod render;
pub mod sample_data;

pub use file_source::FileDataSource;
pub use sample_data::SampleDataSource;
