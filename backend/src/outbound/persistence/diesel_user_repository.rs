//! PostgreSQL-backed `UserRepository` adapter.
//!
//! `create_users` is the scoped session of a seeding request: one pooled
//! connection, one transaction, every user row inserted before its addresses
//! so the `address.user_id` foreign key always resolves.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewAddress, NewUser, User, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AddressRow, NewAddressRow, NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::{address, user_account};

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository drawing connections from `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use jobboard::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/jobboard")).await?;
    /// let repository = DieselUserRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn insert_addresses(
    conn: &mut AsyncPgConnection,
    user_id: i32,
    addresses: &[NewAddress],
) -> QueryResult<Vec<AddressRow>> {
    if addresses.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<NewAddressRow<'_>> = addresses
        .iter()
        .map(|new_address| NewAddressRow {
            email_address: new_address.email_address(),
            user_id,
        })
        .collect();

    diesel::insert_into(address::table)
        .values(&rows)
        .returning(AddressRow::as_returning())
        .get_results(conn)
        .await
}

fn assemble(user: UserRow, addresses: Vec<AddressRow>) -> Result<User, UserPersistenceError> {
    user.into_user(addresses)
        .map_err(|err| UserPersistenceError::query(err.to_string()))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create_users(&self, users: Vec<NewUser>) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = conn
            .transaction(|conn| {
                async move {
                    let mut inserted = Vec::with_capacity(users.len());
                    for new_user in &users {
                        let user_row = diesel::insert_into(user_account::table)
                            .values(NewUserRow {
                                name: new_user.name(),
                                fullname: new_user.fullname(),
                            })
                            .returning(UserRow::as_returning())
                            .get_result(conn)
                            .await?;
                        let address_rows =
                            insert_addresses(conn, user_row.id, new_user.addresses()).await?;
                        inserted.push((user_row, address_rows));
                    }
                    Ok::<_, diesel::result::Error>(inserted)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        inserted
            .into_iter()
            .map(|(user, addresses)| assemble(user, addresses))
            .collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let Some(user) = user_account::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
        else {
            return Ok(None);
        };

        let addresses = address::table
            .filter(address::user_id.eq(user.id))
            .order(address::id.asc())
            .select(AddressRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        assemble(user, addresses).map(Some)
    }

    async fn count(&self) -> Result<u64, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = user_account::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total).map_err(|_| UserPersistenceError::query("negative row count"))
    }
}
