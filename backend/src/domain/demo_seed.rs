//! Demo data seeding behind `POST /`.
//!
//! Every invocation inserts the same three users regardless of the request:
//! spongebob (one address), sandy (two addresses) and patrick (none). Rows
//! accumulate across calls.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{DemoUsersCommand, UserPersistenceError, UserRepository};
use crate::domain::{Error, NewAddress, NewUser, User};

/// The fixed demo users, in creation order.
///
/// # Examples
/// ```
/// use jobboard::domain::demo_users;
///
/// let users = demo_users();
/// assert_eq!(users.len(), 3);
/// assert_eq!(users[0].name(), "spongebob");
/// ```
#[must_use]
pub fn demo_users() -> Vec<NewUser> {
    vec![
        NewUser::new("spongebob")
            .with_fullname("Spongebob Squarepants")
            .with_address(NewAddress::new("spongebob@sqlalchemy.org")),
        NewUser::new("sandy")
            .with_fullname("Sandy Cheeks")
            .with_address(NewAddress::new("sandy@sqlalchemy.org"))
            .with_address(NewAddress::new("sandy@squirrelpower.org")),
        NewUser::new("patrick").with_fullname("Patrick Star"),
    ]
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Service seeding demo users through a [`UserRepository`].
#[derive(Clone)]
pub struct DemoUserSeeder {
    repository: Arc<dyn UserRepository>,
}

impl DemoUserSeeder {
    /// Create a seeder writing through `repository`.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DemoUsersCommand for DemoUserSeeder {
    async fn seed_demo_users(&self) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .create_users(demo_users())
            .await
            .map_err(|err| {
                error!(error = %err, "demo user seeding failed");
                map_persistence_error(err)
            })?;

        let ids: Vec<i32> = users.iter().map(|user| user.id().get()).collect();
        info!(user_ids = ?ids, "demo users created");
        Ok(users)
    }
}
