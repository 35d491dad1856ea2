//! Translation of pool and Diesel failures into port persistence errors.
//!
//! Both mappers yield a [`StoreFailure`]; each port error converts from it, so
//! adapters write `.map_err(map_diesel_error)?` whatever port they implement.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{ListingPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Adapter-neutral failure class with a redacted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreFailure {
    Connection(String),
    Query(String),
}

impl From<StoreFailure> for UserPersistenceError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Connection(message) => Self::connection(message),
            StoreFailure::Query(message) => Self::query(message),
        }
    }
}

impl From<StoreFailure> for ListingPersistenceError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Connection(message) => Self::connection(message),
            StoreFailure::Query(message) => Self::query(message),
        }
    }
}

/// Pool failures mean no session could be opened.
pub(crate) fn map_pool_error(error: PoolError) -> StoreFailure {
    debug!(error = %error, "connection checkout failed");
    StoreFailure::Connection(error.message().to_owned())
}

/// Map Diesel failures, keeping driver details out of the message.
pub(crate) fn map_diesel_error(error: DieselError) -> StoreFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreFailure::Connection("database connection error".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            StoreFailure::Query("foreign key violation".to_owned())
        }
        DieselError::NotFound => StoreFailure::Query("record not found".to_owned()),
        _ => StoreFailure::Query("database error".to_owned()),
    }
}
