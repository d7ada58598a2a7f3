//! Ports connecting the domain to inbound and outbound adapters.

pub mod user_directory;
pub mod user_repository;

pub use user_directory::UserDirectory;
pub use user_repository::{UserRepository, UserStoreError};
