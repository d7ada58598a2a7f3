//! User-directory service applying business rules over a repository.
//!
//! The business outcomes themselves (duplicate email, missing record) are
//! detected atomically by the repository; this service translates them into
//! the stable messages and error codes clients observe.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserDirectory, UserRepository, UserStoreError};
use crate::domain::{Error, NewUser, User};

/// Message returned when a create or update collides on email.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with same email already exists";
/// Message returned when the targeted record does not exist.
pub const USER_NOT_FOUND_MESSAGE: &str = "user not found";

/// Repository-backed implementation of the [`UserDirectory`] port.
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::Connection { message } => Error::service_unavailable(message),
        UserStoreError::Query { message } => Error::internal(message),
        UserStoreError::DuplicateEmail { .. } => Error::conflict(DUPLICATE_EMAIL_MESSAGE),
        UserStoreError::NotFound { .. } => Error::not_found(USER_NOT_FOUND_MESSAGE),
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryService {
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        self.repository.insert(&user).await.map_err(map_store_error)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_store_error)
    }

    async fn update_user(&self, id: i32, user: NewUser) -> Result<User, Error> {
        self.repository
            .update(id, &user)
            .await
            .map_err(map_store_error)
    }

    async fn delete_user(&self, id: i32) -> Result<(), Error> {
        self.repository.delete(id).await.map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for store-error mapping and pass-through results.

    use std::sync::Mutex;

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[derive(Default)]
    struct StubState {
        users: Vec<User>,
        failure: Option<UserStoreError>,
    }

    #[derive(Default)]
    struct StubUserRepository {
        state: Mutex<StubState>,
    }

    impl StubUserRepository {
        fn with_users(users: Vec<User>) -> Self {
            Self {
                state: Mutex::new(StubState {
                    users,
                    failure: None,
                }),
            }
        }

        fn failing_with(failure: UserStoreError) -> Self {
            Self {
                state: Mutex::new(StubState {
                    users: Vec::new(),
                    failure: Some(failure),
                }),
            }
        }

        fn current_failure(&self) -> Option<UserStoreError> {
            self.state.lock().expect("state lock").failure.clone()
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepository {
        async fn insert(&self, user: &NewUser) -> Result<User, UserStoreError> {
            match self.current_failure() {
                Some(failure) => Err(failure),
                None => Ok(user.clone().into_user(1)),
            }
        }

        async fn list(&self) -> Result<Vec<User>, UserStoreError> {
            match self.current_failure() {
                Some(failure) => Err(failure),
                None => Ok(self.state.lock().expect("state lock").users.clone()),
            }
        }

        async fn update(&self, id: i32, user: &NewUser) -> Result<User, UserStoreError> {
            match self.current_failure() {
                Some(failure) => Err(failure),
                None => Ok(user.clone().into_user(id)),
            }
        }

        async fn delete(&self, _id: i32) -> Result<(), UserStoreError> {
            match self.current_failure() {
                Some(failure) => Err(failure),
                None => Ok(()),
            }
        }
    }

    fn draft(email: &str) -> NewUser {
        NewUser {
            name: "Ada".into(),
            email: email.into(),
            profession: "engineer".into(),
        }
    }

    #[tokio::test]
    async fn create_user_returns_the_inserted_record() {
        let service = UserDirectoryService::new(Arc::new(StubUserRepository::default()));

        let user = service
            .create_user(draft("ada@example.com"))
            .await
            .expect("create should succeed");

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn list_users_passes_records_through() {
        let stored = vec![draft("ada@example.com").into_user(1)];
        let service =
            UserDirectoryService::new(Arc::new(StubUserRepository::with_users(stored.clone())));

        let users = service.list_users().await.expect("list should succeed");

        assert_eq!(users, stored);
    }

    #[rstest]
    #[case(
        UserStoreError::duplicate_email("ada@example.com"),
        ErrorCode::Conflict,
        DUPLICATE_EMAIL_MESSAGE
    )]
    #[case(UserStoreError::not_found(9), ErrorCode::NotFound, USER_NOT_FOUND_MESSAGE)]
    #[case(
        UserStoreError::connection("refused"),
        ErrorCode::ServiceUnavailable,
        "refused"
    )]
    #[case(UserStoreError::query("syntax"), ErrorCode::InternalError, "syntax")]
    #[tokio::test]
    async fn update_maps_store_failures(
        #[case] failure: UserStoreError,
        #[case] expected_code: ErrorCode,
        #[case] expected_message: &str,
    ) {
        let service =
            UserDirectoryService::new(Arc::new(StubUserRepository::failing_with(failure)));

        let err = service
            .update_user(9, draft("ada@example.com"))
            .await
            .expect_err("store failures should map to domain errors");

        assert_eq!(err.code(), expected_code);
        assert_eq!(err.message(), expected_message);
    }

    #[tokio::test]
    async fn delete_maps_missing_record_to_not_found() {
        let service = UserDirectoryService::new(Arc::new(StubUserRepository::failing_with(
            UserStoreError::not_found(1),
        )));

        let err = service
            .delete_user(1)
            .await
            .expect_err("missing record should fail");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND_MESSAGE);
    }
}
