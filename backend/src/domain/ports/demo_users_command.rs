//! Driving port for the demo seeding use-case behind `POST /`.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Creates the fixed set of demo users.
///
/// Each call inserts a fresh copy of the demo data; there is no idempotence,
/// so N calls leave 3×N demo users behind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DemoUsersCommand: Send + Sync {
    /// Persist the demo users and return them in creation order.
    async fn seed_demo_users(&self) -> Result<Vec<User>, Error>;
}
