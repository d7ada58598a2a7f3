//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case port backing the `/users` endpoints.
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state from a user-directory port.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
