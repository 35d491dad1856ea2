//! Process-local user store used when no database is configured.
//!
//! Ids are assigned from per-table sequences starting at 1, matching the
//! `SERIAL` columns of the PostgreSQL schema. A batch is committed only after
//! every user in it has been assembled, so a failed batch leaves no rows.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::user::USER_NAME_MAX;
use crate::domain::{Address, AddressId, NewUser, Record, User, UserId};

#[derive(Debug, Default)]
struct Tables {
    next_user_id: i32,
    next_address_id: i32,
    users: BTreeMap<i32, User>,
}

/// In-memory implementation of [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    tables: Mutex<Tables>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Tables>, UserPersistenceError> {
        self.tables
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory store lock poisoned"))
    }
}

/// Enforce the column limits the SQL schema declares.
fn check_columns(new_user: &NewUser) -> Result<(), UserPersistenceError> {
    let length = new_user.name().chars().count();
    if length > USER_NAME_MAX {
        return Err(UserPersistenceError::query(format!(
            "{}.name is {length} characters, limit is {USER_NAME_MAX}",
            User::TABLE
        )));
    }
    Ok(())
}

fn next_id(sequence: &mut i32) -> Result<i32, UserPersistenceError> {
    *sequence = sequence
        .checked_add(1)
        .ok_or_else(|| UserPersistenceError::query("id sequence exhausted"))?;
    Ok(*sequence)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_users(&self, users: Vec<NewUser>) -> Result<Vec<User>, UserPersistenceError> {
        let mut tables = self.lock()?;
        let mut user_seq = tables.next_user_id;
        let mut address_seq = tables.next_address_id;

        let mut created = Vec::with_capacity(users.len());
        for new_user in users {
            check_columns(&new_user)?;
            let user_id = UserId::new(next_id(&mut user_seq)?);
            let mut addresses = Vec::with_capacity(new_user.addresses().len());
            for new_address in new_user.addresses() {
                let address_id = AddressId::new(next_id(&mut address_seq)?);
                addresses.push(Address::new(
                    address_id,
                    new_address.email_address(),
                    user_id,
                ));
            }
            let user = User::try_new(
                user_id,
                new_user.name(),
                new_user.fullname().map(str::to_owned),
                addresses,
            )
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
            created.push(user);
        }

        tables.next_user_id = user_seq;
        tables.next_address_id = address_seq;
        for user in &created {
            tables.users.insert(user.id().get(), user.clone());
        }
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.users.get(&id.get()).cloned())
    }

    async fn count(&self) -> Result<u64, UserPersistenceError> {
        Ok(self.lock()?.users.len() as u64)
    }
}
