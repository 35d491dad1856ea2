//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Scoped sessions**: each repository call checks out one pooled
//!   connection (`bb8` via `diesel-async`) and returns it on completion.
//! - **Typed errors**: pool and Diesel failures map to
//!   [`UserPersistenceError`](crate::domain::ports::UserPersistenceError) or
//!   [`ListingPersistenceError`](crate::domain::ports::ListingPersistenceError).
//!
//! # Example
//!
//! ```ignore
//! use jobboard::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! create_schema("postgres://localhost/jobboard")?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/jobboard")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_listing_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_listing_repository::DieselListingRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, SchemaSetupError, create_schema};
pub use pool::{DbPool, PoolConfig, PoolError};
