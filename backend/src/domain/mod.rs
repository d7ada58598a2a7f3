//! Domain types, ports, and the user-directory service.
//!
//! Everything in this module is transport agnostic: inbound adapters map
//! [`Error`] values to HTTP responses, outbound adapters implement the
//! ports against concrete storage.

pub mod directory;
pub mod error;
pub mod ports;
pub mod user;

pub use directory::UserDirectoryService;
pub use error::{Error, ErrorCode};
pub use user::{NewUser, User};
