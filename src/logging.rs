//! Log output setup.
//!
//! Code logs through the `log` facade re-exported at the crate root
//! (`crate::info!`, `crate::debug!`, ...). This module installs a
//! `tracing-subscriber` formatter that also receives those `log` records.

use tracing_subscriber::EnvFilter;

/// Install the global log subscriber.
///
/// `RUST_LOG` overrides `default_filter` when set. Returns `false` if a
/// subscriber was already installed (e.g. by the embedding application).
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        Ok(()) => {
            crate::debug!("Logging initialized with filter '{}'", default_filter);
            true
        }
        Err(e) => {
            crate::debug!("Log subscriber already installed: {}", e);
            false
        }
    }
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
