//! PostgreSQL-backed `UserRepository` implementation using Diesel.
//!
//! Conflict detection is atomic: inserts and updates rely on the unique
//! constraint on `users.email` and map the resulting database error, and
//! missing rows are detected from the statement outcome itself. No
//! check-then-act query pairs.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserStoreError};
use crate::domain::{NewUser, User};

use super::models::{NewUserRow, UserRow, UserRowChanges};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to store errors.
fn map_pool_error(error: PoolError) -> UserStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to store errors.
///
/// `conflicting_email` is the address a unique violation would be about;
/// read-only statements pass `None` because they cannot conflict.
fn map_diesel_error(error: diesel::result::Error, conflicting_email: Option<&str>) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match (error, conflicting_email) {
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _), Some(email)) => {
            UserStoreError::duplicate_email(email)
        }
        (DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _), _) => {
            UserStoreError::connection("database connection error")
        }
        _ => UserStoreError::query("database error"),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(&user.email)))?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, user: &NewUser) -> Result<User, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result = diesel::update(users::table.find(id))
            .set(UserRowChanges::from(user))
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(diesel::result::Error::NotFound) => Err(UserStoreError::not_found(id)),
            Err(err) => Err(map_diesel_error(err, Some(&user.email))),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(users::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        if affected == 0 {
            return Err(UserStoreError::not_found(id));
        }
        Ok(())
    }
}
