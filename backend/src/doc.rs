//! OpenAPI document aggregating the HTTP surface.

use utoipa::OpenApi;

use crate::domain;
use crate::inbound::http::{health, users};

/// OpenAPI description of the user-service endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        users::create_user,
        users::list_users,
        users::update_user,
        users::delete_user,
        health::live,
        health::ready,
    ),
    components(schemas(
        domain::User,
        domain::Error,
        domain::ErrorCode,
        users::UserPayload,
        users::DeletedResponse,
    )),
    tags(
        (name = "users", description = "CRUD over the user directory"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_user_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/users/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health/ready"));
    }
}
