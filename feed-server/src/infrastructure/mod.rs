pub mod config;
pub mod database;
pub mod fixtures;
pub mod logging;
