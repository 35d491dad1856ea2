//! Builder for the HTTP state from server configuration.

use std::sync::Arc;

use actix_web::web;

use jobboard::domain::DemoUserSeeder;
use jobboard::domain::ports::UserRepository;
use jobboard::inbound::http::state::HttpState;
use jobboard::outbound::memory::InMemoryUserRepository;
use jobboard::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Pick the user store: PostgreSQL when a pool is configured, otherwise the
/// process-local store.
fn build_user_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone())),
        None => Arc::new(InMemoryUserRepository::new()),
    }
}

/// Wire the demo seeding use-case into shared handler state.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let seeder = DemoUserSeeder::new(build_user_repository(config));
    web::Data::new(HttpState::new(Arc::new(seeder)))
}
