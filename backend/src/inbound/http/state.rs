//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::DemoUsersCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub demo_users: Arc<dyn DemoUsersCommand>,
}

impl HttpState {
    /// Construct state from the demo seeding use-case.
    pub fn new(demo_users: Arc<dyn DemoUsersCommand>) -> Self {
        Self { demo_users }
    }
}
