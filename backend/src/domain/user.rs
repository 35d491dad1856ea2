//! User accounts and their email addresses.
//!
//! A [`User`] owns zero or more [`Address`] records through
//! `address.user_id`. The ownership is modelled one way only: the user holds
//! its addresses, and each address refers back to its owner by identifier.
//! Unsaved entities ([`NewUser`], [`NewAddress`]) carry no identifiers; the
//! persistence adapters assign them on commit.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::record::{Record, RecordMap, base_dict};

/// Key under which [`User::as_dict`] nests the user's addresses.
///
/// The spelling is part of the published response contract.
pub const USER_ADDRESSES_KEY: &str = "adresses";

/// Maximum length of [`User::name`] enforced by the `user_account` schema.
pub const USER_NAME_MAX: usize = 30;

/// Store-generated identifier of a `user_account` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Store-generated identifier of an `address` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(i32);

impl AddressId {
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

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address waiting to be persisted with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    email_address: String,
}

impl NewAddress {
    /// Create an unsaved address.
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
        }
    }

    /// Email address text.
    #[must_use]
    pub fn email_address(&self) -> &str {
        self.email_address.as_str()
    }
}

/// User waiting to be persisted, together with its addresses.
///
/// # Examples
/// ```
/// use jobboard::domain::{NewAddress, NewUser};
///
/// let user = NewUser::new("sandy")
///     .with_fullname("Sandy Cheeks")
///     .with_address(NewAddress::new("sandy@sqlalchemy.org"));
/// assert_eq!(user.addresses().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    fullname: Option<String>,
    addresses: Vec<NewAddress>,
}

impl NewUser {
    /// Create an unsaved user with no full name and no addresses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fullname: None,
            addresses: Vec::new(),
        }
    }

    /// Set the full name.
    #[must_use]
    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = Some(fullname.into());
        self
    }

    /// Append an address owned by this user.
    #[must_use]
    pub fn with_address(mut self, address: NewAddress) -> Self {
        self.addresses.push(address);
        self
    }

    /// Short account name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Optional full name.
    #[must_use]
    pub fn fullname(&self) -> Option<&str> {
        self.fullname.as_deref()
    }

    /// Addresses to insert alongside the user.
    #[must_use]
    pub fn addresses(&self) -> &[NewAddress] {
        &self.addresses
    }
}

/// Persisted email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    id: AddressId,
    email_address: String,
    user_id: UserId,
}

impl Address {
    /// Rebuild a persisted address from stored values.
    pub fn new(id: AddressId, email_address: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id,
            email_address: email_address.into(),
            user_id,
        }
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> AddressId {
        self.id
    }

    /// Email address text.
    #[must_use]
    pub fn email_address(&self) -> &str {
        self.email_address.as_str()
    }

    /// Owning user.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl Record for Address {
    const TABLE: &'static str = "address";

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("email_address", json!(self.email_address)),
            ("user_id", json!(self.user_id)),
        ]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address(id={}, email_address={:?})",
            self.id, self.email_address
        )
    }
}

/// Raised when an address is attached to a user that does not own it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("address {address_id} belongs to user {owner}, not user {user_id}")]
pub struct AddressOwnershipError {
    /// Address that failed the check.
    pub address_id: AddressId,
    /// Owner recorded on the address.
    pub owner: UserId,
    /// User the address was attached to.
    pub user_id: UserId,
}

/// Persisted user account with its addresses.
///
/// ## Invariants
/// - every address in `addresses` has `user_id == id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    fullname: Option<String>,
    addresses: Vec<Address>,
}

impl User {
    /// Rebuild a persisted user, checking address ownership.
    ///
    /// # Errors
    ///
    /// Returns [`AddressOwnershipError`] when an address refers to a
    /// different user.
    pub fn try_new(
        id: UserId,
        name: impl Into<String>,
        fullname: Option<String>,
        addresses: Vec<Address>,
    ) -> Result<Self, AddressOwnershipError> {
        if let Some(foreign) = addresses.iter().find(|address| address.user_id != id) {
            return Err(AddressOwnershipError {
                address_id: foreign.id,
                owner: foreign.user_id,
                user_id: id,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            fullname,
            addresses,
        })
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Short account name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Optional full name.
    #[must_use]
    pub fn fullname(&self) -> Option<&str> {
        self.fullname.as_deref()
    }

    /// Addresses owned by this user.
    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }
}

impl Record for User {
    const TABLE: &'static str = "user_account";

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("name", json!(self.name)),
            ("fullname", json!(self.fullname)),
        ]
    }

    fn as_dict(&self) -> RecordMap {
        let mut dict = base_dict(self.columns());
        let addresses = self
            .addresses
            .iter()
            .map(|address| Value::Object(address.as_dict()))
            .collect();
        dict.insert(USER_ADDRESSES_KEY.to_owned(), Value::Array(addresses));
        dict
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(id={}, name={:?}, fullname={:?})",
            self.id, self.name, self.fullname
        )
    }
}

#[cfg(test)]
mod tests;
