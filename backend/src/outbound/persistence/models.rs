//! Row types bridging the Diesel schema and the domain model.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::{NewUser, User};

/// A full row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub profession: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            profession: row.profession,
        }
    }
}

/// Insertable row for create; the store assigns `id`.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub profession: &'a str,
}

/// Changeset for update; every field is overwritten.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserRowChanges<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub profession: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            profession: &user.profession,
        }
    }
}

impl<'a> From<&'a NewUser> for UserRowChanges<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            profession: &user.profession,
        }
    }
}
