pub mod actions;
pub mod browse;
pub mod engine;
pub mod search_bar;
pub mod views;
