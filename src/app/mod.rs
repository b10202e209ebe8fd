//! Application wiring.
//!
//! Builds the shared services from an [`AppConfig`](crate::config::AppConfig).

mod setup;

pub use setup::{build, App, SetupError};
