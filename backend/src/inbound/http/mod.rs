//! HTTP inbound adapter exposing REST endpoints.

pub mod demo_users;
pub mod error;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
