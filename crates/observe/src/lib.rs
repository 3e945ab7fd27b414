//! This crate contains the initialization logic for logging that is shared
//! between the library's consumers and its tests.
pub mod config;
pub mod tracing;

pub use config::Config;
