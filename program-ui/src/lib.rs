pub mod app;
pub mod config;
pub mod csv_loader;
pub mod events;
pub mod logging;
