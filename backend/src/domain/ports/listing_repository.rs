//! Port abstraction for the listing catalogue: companies, currencies and the
//! listings that reference them.

use async_trait::async_trait;

use crate::domain::{
    Company, Currency, Listing, ListingDetails, ListingId, NewCompany, NewCurrency, NewListing,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by listing repository adapters.
    pub enum ListingPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "listing repository connection failed: {message}",
        /// Query or mutation failed during execution, including inserts whose
        /// foreign keys name missing rows.
        Query { message: String } => "listing repository query failed: {message}",
    }
}

/// Storage for listings and the rows they reference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Insert a hiring company.
    async fn create_company(&self, company: NewCompany)
    -> Result<Company, ListingPersistenceError>;

    /// Insert a compensation currency.
    async fn create_currency(
        &self,
        currency: NewCurrency,
    ) -> Result<Currency, ListingPersistenceError>;

    /// Insert a listing whose author, currency and company already exist.
    async fn create_listing(&self, listing: NewListing)
    -> Result<Listing, ListingPersistenceError>;

    /// Fetch a listing joined with its author (and the author's addresses),
    /// currency and company.
    async fn find_details(
        &self,
        id: ListingId,
    ) -> Result<Option<ListingDetails>, ListingPersistenceError>;
}
