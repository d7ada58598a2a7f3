//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user record.
///
/// The identifier is assigned by the data store on insertion and never
/// changes afterwards. Emails are unique across all users, enforced by the
/// store rather than by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-generated identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email, unique per user.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Free-text profession label.
    #[schema(example = "engineer")]
    pub profession: String,
}

/// The field triple supplied when creating a user or overwriting one.
///
/// Update semantics are whole-record: all three fields replace the stored
/// values, there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact email, unique per user.
    pub email: String,
    /// Free-text profession label.
    pub profession: String,
}

impl NewUser {
    /// Build the record that results from assigning `id` to these fields.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            profession: self.profession,
        }
    }
}
