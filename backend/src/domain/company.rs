//! Hiring companies referenced by listings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::record::Record;

/// Store-generated identifier of a `company` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(i32);

impl CompanyId {
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

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Company that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    name: String,
    website: String,
    logo_url: String,
}

impl NewCompany {
    /// Create an unsaved company.
    pub fn new(
        name: impl Into<String>,
        website: impl Into<String>,
        logo_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            logo_url: logo_url.into(),
        }
    }

    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Public website.
    #[must_use]
    pub fn website(&self) -> &str {
        self.website.as_str()
    }

    /// Logo image location.
    #[must_use]
    pub fn logo_url(&self) -> &str {
        self.logo_url.as_str()
    }
}

/// Company offering listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    id: CompanyId,
    name: String,
    website: String,
    logo_url: String,
}

impl Company {
    /// Build a company from stored values.
    pub fn new(
        id: CompanyId,
        name: impl Into<String>,
        website: impl Into<String>,
        logo_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            website: website.into(),
            logo_url: logo_url.into(),
        }
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> CompanyId {
        self.id
    }

    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Public website.
    #[must_use]
    pub fn website(&self) -> &str {
        self.website.as_str()
    }

    /// Logo image location.
    #[must_use]
    pub fn logo_url(&self) -> &str {
        self.logo_url.as_str()
    }
}

impl Record for Company {
    const TABLE: &'static str = "company";

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("name", json!(self.name)),
            ("website", json!(self.website)),
            ("logo_url", json!(self.logo_url)),
        ]
    }
}
