//! Use-case port consumed by inbound adapters for user CRUD.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// The four user-directory operations exposed over HTTP.
///
/// Failures are already mapped to domain [`Error`] values, so inbound
/// adapters only decide how to encode them for their transport.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Create a user from the supplied fields.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// List every stored user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Overwrite all fields of the user identified by `id`.
    async fn update_user(&self, id: i32, user: NewUser) -> Result<User, Error>;

    /// Delete the user identified by `id`.
    async fn delete_user(&self, id: i32) -> Result<(), Error>;
}
