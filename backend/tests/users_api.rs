//! End-to-end CRUD scenario over the HTTP surface.
//!
//! Drives the real handlers, state, and user-directory service against an
//! in-memory repository with the same atomic semantics as the PostgreSQL
//! adapter: duplicate emails and missing rows are detected by the store
//! operation itself.

use std::sync::{Arc, Mutex};

use actix_web::{App, http::StatusCode, test as actix_test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use user_service::domain::ports::{UserRepository, UserStoreError};
use user_service::domain::{NewUser, User, UserDirectoryService};
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users::{create_user, delete_user, list_users, update_user};

#[derive(Default)]
struct InMemoryState {
    users: Vec<User>,
    next_id: i32,
}

/// In-memory [`UserRepository`] mirroring the constraint behaviour of the
/// `users` table: unique email, store-assigned serial ids.
#[derive(Default)]
struct InMemoryUserRepository {
    state: Mutex<InMemoryState>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserStoreError> {
        let mut state = self.state.lock().expect("state lock");
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(UserStoreError::duplicate_email(&user.email));
        }
        state.next_id += 1;
        let created = user.clone().into_user(state.next_id);
        state.users.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.state.lock().expect("state lock").users.clone())
    }

    async fn update(&self, id: i32, user: &NewUser) -> Result<User, UserStoreError> {
        let mut state = self.state.lock().expect("state lock");
        // An update against a missing row affects zero rows before any
        // constraint can fire; the conflict only applies to a different row.
        if state.users.iter().all(|u| u.id != id) {
            return Err(UserStoreError::NotFound { id });
        }
        if state.users.iter().any(|u| u.email == user.email && u.id != id) {
            return Err(UserStoreError::duplicate_email(&user.email));
        }
        let stored = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserStoreError::NotFound { id })?;
        *stored = user.clone().into_user(id);
        Ok(stored.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), UserStoreError> {
        let mut state = self.state.lock().expect("state lock");
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(UserStoreError::NotFound { id });
        }
        Ok(())
    }
}

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repository = Arc::new(InMemoryUserRepository::default());
    let directory = UserDirectoryService::new(repository);
    let state = HttpState::new(Arc::new(directory));
    App::new()
        .app_data(web::Data::new(state))
        .service(create_user)
        .service(list_users)
        .service(update_user)
        .service(delete_user)
}

fn body(name: &str, email: &str, profession: &str) -> Value {
    json!({ "name": name, "email": email, "profession": profession })
}

#[actix_web::test]
async fn full_crud_scenario() {
    let app = actix_test::init_service(test_app()).await;

    // Create -> 201 with id 1.
    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(body("A", "a@x.com", "eng"))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(created).await;
    assert_eq!(
        created,
        json!({ "id": 1, "name": "A", "email": "a@x.com", "profession": "eng" })
    );

    // Same email again -> conflict with the business message.
    let duplicate = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(body("B", "a@x.com", "ops"))
            .to_request(),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    let duplicate: Value = actix_test::read_body_json(duplicate).await;
    assert_eq!(
        duplicate.get("message").and_then(Value::as_str),
        Some("User with same email already exists")
    );

    // Update id 1 -> 200 with the overwritten record.
    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/1")
            .set_json(body("A2", "a2@x.com", "eng"))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(updated).await;
    assert_eq!(
        updated,
        json!({ "id": 1, "name": "A2", "email": "a2@x.com", "profession": "eng" })
    );

    // Delete id 1 -> 200 with the confirmation body.
    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let deleted: Value = actix_test::read_body_json(deleted).await;
    assert_eq!(deleted, json!({ "message": "user deleted" }));

    // Delete id 1 again -> not found.
    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let missing: Value = actix_test::read_body_json(missing).await;
    assert_eq!(
        missing.get("message").and_then(Value::as_str),
        Some("user not found")
    );
}

#[actix_web::test]
async fn listing_returns_every_created_user() {
    let app = actix_test::init_service(test_app()).await;

    for (name, email) in [("A", "a@x.com"), ("B", "b@x.com")] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(body(name, email, "eng"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let listed: Vec<User> = actix_test::read_body_json(listed).await;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|u| u.email == "a@x.com"));
    assert!(listed.iter().any(|u| u.email == "b@x.com"));
}

#[actix_web::test]
async fn update_of_missing_id_fails_regardless_of_body() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/7")
            .set_json(body("Nobody", "nobody@x.com", "eng"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_of_missing_id_with_taken_email_is_not_found() {
    let app = actix_test::init_service(test_app()).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(body("A", "a@x.com", "eng"))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    // The id decides the outcome; the body carrying a taken email must not
    // turn a missing row into a conflict.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/99")
            .set_json(body("Nobody", "a@x.com", "eng"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        response.get("message").and_then(Value::as_str),
        Some("user not found")
    );
}

#[actix_web::test]
async fn update_without_changing_email_does_not_conflict() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(body("A", "a@x.com", "eng"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/1")
            .set_json(body("A renamed", "a@x.com", "eng"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
