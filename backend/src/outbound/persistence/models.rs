//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::user::AddressOwnershipError;
use crate::domain::{
    Address, AddressId, Company, CompanyId, CompensationFreqParseError, Currency, CurrencyId,
    Listing, ListingFields, ListingId, User, UserId,
};

use super::schema::{address, company, currency, listing, user_account};

/// Row struct for reading from the `user_account` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_account)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub fullname: Option<String>,
}

/// Insertable struct for creating `user_account` rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_account)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub fullname: Option<&'a str>,
}

/// Row struct for reading from the `address` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = address)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AddressRow {
    pub id: i32,
    pub email_address: String,
    pub user_id: i32,
}

/// Insertable struct for creating `address` rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = address)]
pub(crate) struct NewAddressRow<'a> {
    pub email_address: &'a str,
    pub user_id: i32,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self::new(
            AddressId::new(row.id),
            row.email_address,
            UserId::new(row.user_id),
        )
    }
}

impl UserRow {
    /// Assemble the domain user from its row and the address rows it owns.
    pub(crate) fn into_user(self, addresses: Vec<AddressRow>) -> Result<User, AddressOwnershipError> {
        User::try_new(
            UserId::new(self.id),
            self.name,
            self.fullname,
            addresses.into_iter().map(Address::from).collect(),
        )
    }
}

/// Row struct for reading from the `company` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = company)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub id: i32,
    pub name: String,
    pub website: String,
    pub logo_url: String,
}

/// Insertable struct for creating `company` rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = company)]
pub(crate) struct NewCompanyRow<'a> {
    pub name: &'a str,
    pub website: &'a str,
    pub logo_url: &'a str,
}

/// Row struct for reading from the `currency` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = currency)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CurrencyRow {
    pub id: i32,
    pub code: String,
    pub min_denomination_decimals: i32,
}

/// Insertable struct for creating `currency` rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = currency)]
pub(crate) struct NewCurrencyRow<'a> {
    pub code: &'a str,
    pub min_denomination_decimals: i32,
}

/// Row struct for reading from the `listing` table.
///
/// `compensation_freq` is kept as stored text and parsed on conversion.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = listing)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ListingRow {
    pub id: i32,
    pub title: String,
    pub user_id: i32,
    pub compensation: i32,
    pub compensation_freq: String,
    pub currency_id: i32,
    pub company_id: i32,
}

/// Insertable struct for creating `listing` rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = listing)]
pub(crate) struct NewListingRow<'a> {
    pub title: &'a str,
    pub user_id: i32,
    pub compensation: i32,
    pub compensation_freq: &'static str,
    pub currency_id: i32,
    pub company_id: i32,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self::new(CompanyId::new(row.id), row.name, row.website, row.logo_url)
    }
}

impl From<CurrencyRow> for Currency {
    fn from(row: CurrencyRow) -> Self {
        Self::new(
            CurrencyId::new(row.id),
            row.code,
            row.min_denomination_decimals,
        )
    }
}

impl TryFrom<ListingRow> for Listing {
    type Error = CompensationFreqParseError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        Ok(Self::new(ListingFields {
            id: ListingId::new(row.id),
            title: row.title,
            user_id: UserId::new(row.user_id),
            compensation: row.compensation,
            compensation_freq: row.compensation_freq.parse()?,
            currency_id: CurrencyId::new(row.currency_id),
            company_id: CompanyId::new(row.company_id),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompensationFreq;
    use rstest::rstest;

    fn address_row(id: i32, email: &str, user_id: i32) -> AddressRow {
        AddressRow {
            id,
            email_address: email.to_owned(),
            user_id,
        }
    }

    #[rstest]
    fn into_user_attaches_owned_addresses() {
        let row = UserRow {
            id: 4,
            name: "sandy".to_owned(),
            fullname: Some("Sandy Cheeks".to_owned()),
        };

        let user = row
            .into_user(vec![
                address_row(7, "sandy@sqlalchemy.org", 4),
                address_row(8, "sandy@squirrelpower.org", 4),
            ])
            .expect("rows share the owner");

        assert_eq!(user.id(), UserId::new(4));
        assert_eq!(user.addresses().len(), 2);
        assert!(user.addresses().iter().all(|a| a.user_id() == user.id()));
    }

    #[rstest]
    fn into_user_rejects_rows_of_another_owner() {
        let row = UserRow {
            id: 4,
            name: "sandy".to_owned(),
            fullname: None,
        };

        let result = row.into_user(vec![address_row(1, "spongebob@sqlalchemy.org", 3)]);

        assert!(result.is_err());
    }

    fn listing_row(freq: &str) -> ListingRow {
        ListingRow {
            id: 9,
            title: "Fry cook".to_owned(),
            user_id: 1,
            compensation: 4_200,
            compensation_freq: freq.to_owned(),
            currency_id: 2,
            company_id: 3,
        }
    }

    #[rstest]
    fn listing_row_parses_stored_frequency() {
        let listing = Listing::try_from(listing_row("yearly")).expect("known frequency");

        assert_eq!(listing.id(), ListingId::new(9));
        assert_eq!(listing.compensation_freq(), CompensationFreq::Yearly);
        assert_eq!(listing.currency_id(), CurrencyId::new(2));
        assert_eq!(listing.company_id(), CompanyId::new(3));
    }

    #[rstest]
    fn listing_row_rejects_unknown_frequency() {
        let err = Listing::try_from(listing_row("weekly")).expect_err("not a frequency");
        assert_eq!(err, CompensationFreqParseError("weekly".to_owned()));
    }

    #[rstest]
    fn catalogue_rows_keep_their_columns() {
        let company = Company::from(CompanyRow {
            id: 3,
            name: "Krusty Krab".to_owned(),
            website: "https://krustykrab.example".to_owned(),
            logo_url: "https://krustykrab.example/logo.png".to_owned(),
        });
        let currency = Currency::from(CurrencyRow {
            id: 2,
            code: "USD".to_owned(),
            min_denomination_decimals: 2,
        });

        assert_eq!(company.id(), CompanyId::new(3));
        assert_eq!(company.website(), "https://krustykrab.example");
        assert_eq!(currency.code(), "USD");
        assert_eq!(currency.min_denomination_decimals(), 2);
    }
}
