//! Domain primitives and aggregates.
//!
//! Purpose: Define the job board entities (users, addresses, companies,
//! currencies, listings), their record serialisation, and the demo seeding
//! use-case. Types are transport agnostic; inbound adapters translate them to
//! HTTP and outbound adapters translate them to table rows.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Record / RecordMap: declared-column serialisation used by `as_dict`.
//! - User / Address / NewUser / NewAddress: account owners and their emails.
//! - Company / Currency / Listing / ListingDetails / CompensationFreq:
//!   listing catalogue entities, with `New*` counterparts for inserts.
//! - DemoUserSeeder: creates the fixed demo users.

pub mod company;
pub mod currency;
pub mod demo_seed;
pub mod error;
pub mod listing;
pub mod ports;
pub mod record;
pub mod trace_id;
pub mod user;

pub use self::company::{Company, CompanyId, NewCompany};
pub use self::currency::{Currency, CurrencyId, NewCurrency};
pub use self::demo_seed::{DemoUserSeeder, demo_users};
pub use self::error::{Error, ErrorCode};
pub use self::listing::{
    CompensationFreq, CompensationFreqParseError, Listing, ListingDetails, ListingFields,
    ListingId, ListingRelationError, NewListing,
};
pub use self::record::{Record, RecordMap};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Address, AddressId, AddressOwnershipError, NewAddress, NewUser, USER_ADDRESSES_KEY, User,
    UserId,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use jobboard::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::internal("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
