//! Demo seeding endpoint.
//!
//! ```text
//! POST /
//! ```
//!
//! The request body is never read: any payload, including malformed JSON or
//! none at all, seeds the same three users.

use actix_web::{post, web};
use tracing::error;

use crate::domain::{Error, Record, RecordMap};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserRecordSchema};
use crate::inbound::http::state::HttpState;

/// Create spongebob, sandy and patrick, returning spongebob's record.
#[utoipa::path(
    post,
    path = "/",
    responses(
        (status = 200, description = "First created demo user", body = UserRecordSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["demo"],
    operation_id = "createDemoUsers"
)]
#[post("/")]
pub async fn create_demo_users(state: web::Data<HttpState>) -> ApiResult<web::Json<RecordMap>> {
    let users = state.demo_users.seed_demo_users().await?;
    let Some(first) = users.first() else {
        error!("demo seeding returned no users");
        return Err(Error::internal("demo seeding returned no users"));
    };
    Ok(web::Json(first.as_dict()))
}

#[cfg(test)]
mod tests;
