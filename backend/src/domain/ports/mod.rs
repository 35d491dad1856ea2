//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod demo_users_command;
mod listing_repository;
mod user_repository;

#[cfg(test)]
pub use demo_users_command::MockDemoUsersCommand;
pub use demo_users_command::DemoUsersCommand;
#[cfg(test)]
pub use listing_repository::MockListingRepository;
pub use listing_repository::{ListingPersistenceError, ListingRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
