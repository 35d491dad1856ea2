//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the single `POST /` endpoint and the schema wrappers
//! from [`crate::inbound::http::schemas`]. The document is not served; export
//! it with `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    AddressRecordSchema, ErrorCodeSchema, ErrorSchema, UserRecordSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job board backend API",
        description = "Seeds demo user accounts and returns their JSON records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::demo_users::create_demo_users),
    components(schemas(
        UserRecordSchema,
        AddressRecordSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "demo", description = "Demo data seeding")
    )
)]
pub struct ApiDoc;
