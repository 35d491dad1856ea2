//! Startup schema creation from the embedded migration bundle.
//!
//! `migrations/` is compiled into the binary; applying it is idempotent
//! because Diesel records applied versions in `__diesel_schema_migrations`.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

/// Migrations from the crate's `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while creating the schema.
#[derive(Debug, Error)]
pub enum SchemaSetupError {
    /// The store could not be reached.
    #[error("failed to connect for schema setup: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Error reported by the migration harness.
        message: String,
    },
}

/// Create every table that does not exist yet.
///
/// This is blocking; call it before the server starts or from
/// `spawn_blocking`.
///
/// # Errors
///
/// Returns [`SchemaSetupError`] when the connection or a migration fails.
pub fn create_schema(database_url: &str) -> Result<usize, SchemaSetupError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaSetupError::Apply {
            message: err.to_string(),
        })?;
    info!(applied = applied.len(), "schema migrations applied");
    Ok(applied.len())
}
