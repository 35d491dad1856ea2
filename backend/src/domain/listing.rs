//! Job listings and their compensation terms.
//!
//! Listings reference their author ([`User`]), the [`Currency`] compensation
//! is quoted in, and the hiring [`Company`] by foreign key. Adapters of
//! [`ListingRepository`](crate::domain::ports::ListingRepository) persist
//! [`NewListing`] values and load [`ListingDetails`] by joining on those keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::record::{Record, RecordMap, base_dict};
use crate::domain::{Company, CompanyId, Currency, CurrencyId, User, UserId};

/// Store-generated identifier of a `listing` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(i32);

impl ListingId {
    /// Wrap a raw primary key value.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw primary key value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Period a compensation amount is paid over.
///
/// Each variant maps to the number of days it spans, so amounts quoted with
/// different frequencies can be normalised to a daily figure.
///
/// # Examples
/// ```
/// use jobboard::domain::CompensationFreq;
///
/// assert_eq!(CompensationFreq::Yearly.multiplier(), 365.25);
/// assert_eq!("hourly".parse::<CompensationFreq>(), Ok(CompensationFreq::Hourly));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompensationFreq {
    /// Paid once a month.
    Monthly,
    /// Paid once a year.
    Yearly,
    /// Paid by the hour.
    Hourly,
}

impl CompensationFreq {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Yearly, Self::Hourly];

    /// Day-equivalent multiplier of the frequency.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Monthly => 30.437,
            Self::Yearly => 365.25,
            Self::Hourly => 1.0,
        }
    }

    /// Name stored in the `listing.compensation_freq` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Hourly => "hourly",
        }
    }
}

impl fmt::Display for CompensationFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored frequency name is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown compensation frequency: {0}")]
pub struct CompensationFreqParseError(pub String);

impl FromStr for CompensationFreq {
    type Err = CompensationFreqParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| CompensationFreqParseError(s.to_owned()))
    }
}

/// Listing that has not been persisted yet.
///
/// The foreign keys must name rows that already exist; stores reject the
/// insert otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    /// Listing headline.
    pub title: String,
    /// Author of the listing.
    pub user_id: UserId,
    /// Compensation amount in the currency's minimum denomination.
    pub compensation: i32,
    /// Period the compensation amount covers.
    pub compensation_freq: CompensationFreq,
    /// Currency the compensation is quoted in.
    pub currency_id: CurrencyId,
    /// Hiring company.
    pub company_id: CompanyId,
}

/// Persisted job listing.
///
/// In [`Record::as_dict`] the `compensation_freq` column holds the lowercase
/// frequency name (`"monthly"`), not its day multiplier; read the multiplier
/// through [`CompensationFreq::multiplier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    id: ListingId,
    title: String,
    user_id: UserId,
    compensation: i32,
    compensation_freq: CompensationFreq,
    currency_id: CurrencyId,
    company_id: CompanyId,
}

/// Stored column values of a [`Listing`], grouped to keep construction readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFields {
    /// Primary key.
    pub id: ListingId,
    /// Listing headline.
    pub title: String,
    /// Author of the listing.
    pub user_id: UserId,
    /// Compensation amount in the currency's minimum denomination.
    pub compensation: i32,
    /// Period the compensation amount covers.
    pub compensation_freq: CompensationFreq,
    /// Currency the compensation is quoted in.
    pub currency_id: CurrencyId,
    /// Hiring company.
    pub company_id: CompanyId,
}

impl Listing {
    /// Build a listing from stored values.
    #[must_use]
    pub fn new(fields: ListingFields) -> Self {
        let ListingFields {
            id,
            title,
            user_id,
            compensation,
            compensation_freq,
            currency_id,
            company_id,
        } = fields;
        Self {
            id,
            title,
            user_id,
            compensation,
            compensation_freq,
            currency_id,
            company_id,
        }
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> ListingId {
        self.id
    }

    /// Listing headline.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Author of the listing.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Compensation amount.
    #[must_use]
    pub fn compensation(&self) -> i32 {
        self.compensation
    }

    /// Period the compensation amount covers.
    #[must_use]
    pub fn compensation_freq(&self) -> CompensationFreq {
        self.compensation_freq
    }

    /// Currency the compensation is quoted in.
    #[must_use]
    pub fn currency_id(&self) -> CurrencyId {
        self.currency_id
    }

    /// Hiring company.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }
}

impl Record for Listing {
    const TABLE: &'static str = "listing";

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("title", json!(self.title)),
            ("user_id", json!(self.user_id)),
            ("compensation", json!(self.compensation)),
            ("compensation_freq", json!(self.compensation_freq)),
            ("currency_id", json!(self.currency_id)),
            ("company_id", json!(self.company_id)),
        ]
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listing(id={}, title={:?})", self.id, self.title)
    }
}

/// Raised when a related entity does not match the listing's foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingRelationError {
    /// The supplied user is not the listing author.
    #[error("listing {listing} references user {expected}, got user {actual}")]
    User {
        /// Listing being assembled.
        listing: ListingId,
        /// Foreign key stored on the listing.
        expected: UserId,
        /// Identifier of the supplied user.
        actual: UserId,
    },
    /// The supplied currency is not the listing currency.
    #[error("listing {listing} references currency {expected}, got currency {actual}")]
    Currency {
        /// Listing being assembled.
        listing: ListingId,
        /// Foreign key stored on the listing.
        expected: CurrencyId,
        /// Identifier of the supplied currency.
        actual: CurrencyId,
    },
    /// The supplied company is not the hiring company.
    #[error("listing {listing} references company {expected}, got company {actual}")]
    Company {
        /// Listing being assembled.
        listing: ListingId,
        /// Foreign key stored on the listing.
        expected: CompanyId,
        /// Identifier of the supplied company.
        actual: CompanyId,
    },
}

/// A listing joined with the rows its foreign keys point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDetails {
    listing: Listing,
    user: User,
    currency: Currency,
    company: Company,
}

impl ListingDetails {
    /// Join a listing with its author, currency and company.
    ///
    /// # Errors
    ///
    /// Returns [`ListingRelationError`] when a related entity's identifier
    /// differs from the listing's foreign key.
    pub fn try_new(
        listing: Listing,
        user: User,
        currency: Currency,
        company: Company,
    ) -> Result<Self, ListingRelationError> {
        if user.id() != listing.user_id {
            return Err(ListingRelationError::User {
                listing: listing.id,
                expected: listing.user_id,
                actual: user.id(),
            });
        }
        if currency.id() != listing.currency_id {
            return Err(ListingRelationError::Currency {
                listing: listing.id,
                expected: listing.currency_id,
                actual: currency.id(),
            });
        }
        if company.id() != listing.company_id {
            return Err(ListingRelationError::Company {
                listing: listing.id,
                expected: listing.company_id,
                actual: company.id(),
            });
        }
        Ok(Self {
            listing,
            user,
            currency,
            company,
        })
    }

    /// The listing row.
    #[must_use]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Listing author.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Currency of the compensation.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Hiring company.
    #[must_use]
    pub fn company(&self) -> &Company {
        &self.company
    }
}

impl Record for ListingDetails {
    const TABLE: &'static str = Listing::TABLE;

    fn columns(&self) -> Vec<(&'static str, Value)> {
        self.listing.columns()
    }

    /// Listing columns merged with the author under `user` and the currency
    /// under `currency`.
    fn as_dict(&self) -> RecordMap {
        let mut dict = base_dict(self.columns());
        dict.insert("user".to_owned(), Value::Object(self.user.as_dict()));
        dict.insert("currency".to_owned(), Value::Object(self.currency.as_dict()));
        dict
    }
}
