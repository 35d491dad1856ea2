//! Port abstraction for user persistence adapters and their errors.
//!
//! Adapters own the unit of work: [`UserRepository::create_users`] must insert
//! every user and every address in one transaction, so either all rows become
//! visible or none do.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for user accounts and the addresses they own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert users with their addresses atomically.
    ///
    /// Returns the persisted users, in input order, with store-assigned
    /// identifiers and each user's addresses attached.
    async fn create_users(&self, users: Vec<NewUser>) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user and the addresses it owns.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Number of persisted users.
    async fn count(&self) -> Result<u64, UserPersistenceError>;
}
