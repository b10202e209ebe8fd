//! Application setup and initialization.
//!
//! Opens the database, brings its schema up to date, and assembles the
//! services every command needs into an [`AppState`].

use std::sync::Arc;

use crate::commands::AppState;
use crate::config::{AppConfig, ConfigError};
use crate::events::LogEventEmitter;
use crate::session::MemorySessionStore;
use crate::turso::{self, TursoClient, TursoError};

/// Error types for application startup
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Database could not be opened or migrated
    #[error("Database initialization failed: {0}")]
    Database(#[from] TursoError),
}

/// Initialized services
///
/// `client` and `sessions` are the concrete handles behind `state`, kept for
/// catalog management and session housekeeping (e.g. periodic purges).
pub struct App {
    pub config: AppConfig,
    pub client: Arc<TursoClient>,
    pub sessions: Arc<MemorySessionStore>,
    pub state: AppState,
}

/// Main application setup function.
///
/// Opens `config.database_path()`, runs schema migrations and creates the
/// session store with the configured idle lifetime.
pub async fn build(config: AppConfig) -> Result<App, SetupError> {
    crate::info!("Setting up vocab...");

    let client = setup_turso_database(&config).await?;
    let sessions = Arc::new(MemorySessionStore::new(config.session_ttl()));

    let state = AppState::new(
        client.clone(),
        sessions.clone(),
        Arc::new(LogEventEmitter),
    );

    crate::info!(
        "Setup complete (session lifetime {}s)",
        config.session_ttl_secs
    );
    Ok(App {
        config,
        client,
        sessions,
        state,
    })
}

async fn setup_turso_database(config: &AppConfig) -> Result<Arc<TursoClient>, SetupError> {
    let client = TursoClient::with_file_name(config.data_dir.clone(), &config.database_file).await?;
    crate::info!("Turso database initialized at: {:?}", client.db_path());

    if let Err(e) = turso::initialize_schema(&client).await {
        crate::error!("Failed to initialize Turso schema: {}", e);
        return Err(e.into());
    }
    crate::debug!("Turso database schema initialized");

    Ok(Arc::new(client))
}

#[cfg(test)]
#[path = "setup_test.rs"]
mod tests;
