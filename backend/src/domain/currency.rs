//! Currencies in which listing compensation is quoted.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::record::Record;

/// Store-generated identifier of a `currency` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyId(i32);

impl CurrencyId {
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

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Currency that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCurrency {
    code: String,
    min_denomination_decimals: i32,
}

impl NewCurrency {
    /// Create an unsaved currency.
    pub fn new(code: impl Into<String>, min_denomination_decimals: i32) -> Self {
        Self {
            code: code.into(),
            min_denomination_decimals,
        }
    }

    /// Three letter code.
    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Number of decimals of the minimum denomination.
    #[must_use]
    pub fn min_denomination_decimals(&self) -> i32 {
        self.min_denomination_decimals
    }
}

/// Currency with its smallest denomination expressed in decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    id: CurrencyId,
    code: String,
    min_denomination_decimals: i32,
}

impl Currency {
    /// Build a currency from stored values.
    pub fn new(id: CurrencyId, code: impl Into<String>, min_denomination_decimals: i32) -> Self {
        Self {
            id,
            code: code.into(),
            min_denomination_decimals,
        }
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> CurrencyId {
        self.id
    }

    /// Three letter code, e.g. `EUR`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Number of decimals of the minimum denomination (2 for cents).
    #[must_use]
    pub fn min_denomination_decimals(&self) -> i32 {
        self.min_denomination_decimals
    }
}

impl Record for Currency {
    const TABLE: &'static str = "currency";

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("code", json!(self.code)),
            ("min_denomination_decimals", json!(self.min_denomination_decimals)),
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency(id={}, code={:?})", self.id, self.code)
    }
}
