//! PostgreSQL-backed `ListingRepository` adapter.
//!
//! `find_details` loads a listing with its author, currency and company in one
//! inner join over the `listing` foreign keys, then fetches the author's
//! addresses on the same connection.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ListingPersistenceError, ListingRepository};
use crate::domain::{
    Company, Currency, Listing, ListingDetails, ListingId, NewCompany, NewCurrency, NewListing,
    Record, User,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    AddressRow, CompanyRow, CurrencyRow, ListingRow, NewCompanyRow, NewCurrencyRow,
    NewListingRow, UserRow,
};
use super::pool::DbPool;
use super::schema::{address, company, currency, listing, user_account};

/// Diesel-backed implementation of the listing repository port.
#[derive(Clone)]
pub struct DieselListingRepository {
    pool: DbPool,
}

impl DieselListingRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn query_error(table: &str, error: impl std::fmt::Display) -> ListingPersistenceError {
    ListingPersistenceError::query(format!("invalid {table} row: {error}"))
}

#[async_trait]
impl ListingRepository for DieselListingRepository {
    async fn create_company(
        &self,
        new_company: NewCompany,
    ) -> Result<Company, ListingPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(company::table)
            .values(NewCompanyRow {
                name: new_company.name(),
                website: new_company.website(),
                logo_url: new_company.logo_url(),
            })
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(table = Company::TABLE, id = row.id, "row inserted");
        Ok(Company::from(row))
    }

    async fn create_currency(
        &self,
        new_currency: NewCurrency,
    ) -> Result<Currency, ListingPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(currency::table)
            .values(NewCurrencyRow {
                code: new_currency.code(),
                min_denomination_decimals: new_currency.min_denomination_decimals(),
            })
            .returning(CurrencyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(table = Currency::TABLE, id = row.id, "row inserted");
        Ok(Currency::from(row))
    }

    async fn create_listing(
        &self,
        new_listing: NewListing,
    ) -> Result<Listing, ListingPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(listing::table)
            .values(NewListingRow {
                title: new_listing.title.as_str(),
                user_id: new_listing.user_id.get(),
                compensation: new_listing.compensation,
                compensation_freq: new_listing.compensation_freq.as_str(),
                currency_id: new_listing.currency_id.get(),
                company_id: new_listing.company_id.get(),
            })
            .returning(ListingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(table = Listing::TABLE, id = row.id, "row inserted");
        Listing::try_from(row).map_err(|err| query_error(Listing::TABLE, err))
    }

    async fn find_details(
        &self,
        id: ListingId,
    ) -> Result<Option<ListingDetails>, ListingPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let joined: Option<(ListingRow, UserRow, CurrencyRow, CompanyRow)> = listing::table
            .inner_join(user_account::table)
            .inner_join(currency::table)
            .inner_join(company::table)
            .filter(listing::id.eq(id.get()))
            .select((
                ListingRow::as_select(),
                UserRow::as_select(),
                CurrencyRow::as_select(),
                CompanyRow::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some((listing_row, user_row, currency_row, company_row)) = joined else {
            return Ok(None);
        };

        let addresses = address::table
            .filter(address::user_id.eq(user_row.id))
            .order(address::id.asc())
            .select(AddressRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let listing =
            Listing::try_from(listing_row).map_err(|err| query_error(Listing::TABLE, err))?;
        let user = user_row
            .into_user(addresses)
            .map_err(|err| query_error(User::TABLE, err))?;
        ListingDetails::try_new(
            listing,
            user,
            Currency::from(currency_row),
            Company::from(company_row),
        )
        .map(Some)
        .map_err(|err| query_error(Listing::TABLE, err))
    }
}
