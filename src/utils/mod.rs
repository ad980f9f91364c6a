/// Module containing helpers for reading configuration from the environment
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
