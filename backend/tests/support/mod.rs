//! Shared helpers for integration tests that need embedded PostgreSQL.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! helpers shared between suites live here.

pub mod pg_embed;

/// Returns true when `RUN_PG_EMBEDDED=1` opts into the embedded cluster.
pub fn embedded_postgres_enabled() -> bool {
    std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1")
}
