//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

/// Persistence errors raised by user repository adapters.
///
/// `DuplicateEmail` and `NotFound` are business outcomes detected atomically
/// by the store (unique-constraint violation, zero affected rows); the
/// remaining variants are infrastructure failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },

    /// Another record already holds the requested email.
    #[error("email already in use: {email}")]
    DuplicateEmail { email: String },

    /// No record exists for the requested identifier.
    #[error("no user with id {id}")]
    NotFound { id: i32 },
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a duplicate-email error for the given address.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Create a not-found error for the given identifier.
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }
}

/// Storage operations over user records.
///
/// Implementations must enforce email uniqueness and row existence inside a
/// single statement each; callers never issue a separate existence check
/// before mutating.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record, failing with [`UserStoreError::DuplicateEmail`]
    /// when the email is already taken.
    async fn insert(&self, user: &NewUser) -> Result<User, UserStoreError>;

    /// Fetch every stored record.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Overwrite all fields of the record identified by `id`.
    ///
    /// Fails with [`UserStoreError::NotFound`] when the record is absent and
    /// with [`UserStoreError::DuplicateEmail`] when the new email belongs to
    /// a different record. Keeping a record's own email is not a conflict.
    async fn update(&self, id: i32, user: &NewUser) -> Result<User, UserStoreError>;

    /// Delete the record identified by `id`, failing with
    /// [`UserStoreError::NotFound`] when it is absent.
    async fn delete(&self, id: i32) -> Result<(), UserStoreError>;
}
