//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// User accounts.
    user_account (id) {
        id -> Int4,
        #[max_length = 30]
        name -> Varchar,
        fullname -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Email addresses owned by user accounts.
    address (id) {
        id -> Int4,
        email_address -> Varchar,
        user_id -> Int4,
    }
}

diesel::table! {
    /// Hiring companies.
    company (id) {
        id -> Int4,
        #[max_length = 30]
        name -> Varchar,
        website -> Varchar,
        logo_url -> Varchar,
    }
}

diesel::table! {
    /// Compensation currencies.
    currency (id) {
        id -> Int4,
        #[max_length = 3]
        code -> Varchar,
        min_denomination_decimals -> Int4,
    }
}

diesel::table! {
    /// Job listings.
    listing (id) {
        id -> Int4,
        title -> Varchar,
        user_id -> Int4,
        compensation -> Int4,
        compensation_freq -> Varchar,
        currency_id -> Int4,
        company_id -> Int4,
    }
}

diesel::joinable!(address -> user_account (user_id));
diesel::joinable!(listing -> company (company_id));
diesel::joinable!(listing -> currency (currency_id));
diesel::joinable!(listing -> user_account (user_id));

diesel::allow_tables_to_appear_in_same_query!(address, company, currency, listing, user_account,);
