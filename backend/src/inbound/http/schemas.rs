//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON those types produce and exist only for the
//! generated OpenAPI document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The relational store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "internal_error")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Internal server error")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c0a4e-3a51-4c55-9b1e-0d3f3c8d2a10")]
    trace_id: Option<String>,
}

/// Address record as rendered inside a user record; `user_id` is omitted.
#[derive(ToSchema)]
#[schema(as = AddressRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AddressRecordSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "spongebob@sqlalchemy.org")]
    email_address: String,
}

/// User record returned by `POST /`.
///
/// The address list key is spelled `adresses`; clients depend on it.
#[derive(ToSchema)]
#[schema(as = UserRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRecordSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "spongebob")]
    name: String,
    #[schema(example = "Spongebob Squarepants")]
    fullname: Option<String>,
    adresses: Vec<AddressRecordSchema>,
}
