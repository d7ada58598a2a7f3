//! Users API handlers.
//!
//! ```text
//! POST   /users       {"name":"Ada","email":"ada@example.com","profession":"engineer"}
//! GET    /users
//! PUT    /users/{id}  {"name":"Ada","email":"ada@example.com","profession":"engineer"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body shared by create and update.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserPayload {
    /// Display name.
    pub name: String,
    /// Contact email, unique per user.
    pub email: String,
    /// Free-text profession label.
    pub profession: String,
}

impl From<UserPayload> for NewUser {
    fn from(value: UserPayload) -> Self {
        Self {
            name: value.name,
            email: value.email,
            profession: value.profession,
        }
    }
}

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    /// Human-readable confirmation.
    #[schema(example = "user deleted")]
    pub message: String,
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Overwrite all fields of a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UserPayload,
    params(
        ("id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "No user with this id", body = Error),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users
        .update_user(path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 404, description = "No user with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeletedResponse>> {
    state.users.delete_user(path.into_inner()).await?;
    Ok(web::Json(DeletedResponse {
        message: "user deleted".into(),
    }))
}
