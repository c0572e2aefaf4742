use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::token::TokenConfig;
use crate::proxy::UpstreamClient;
use crate::user::repository::UserRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository + Send + Sync>,
    pub token_config: TokenConfig,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        token_config: TokenConfig,
        upstream: Arc<UpstreamClient>,
    ) -> Self {
        Self {
            user_repository,
            token_config,
            upstream,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Any authentication failure: missing, malformed or expired token,
    /// unknown token subject, or login with an unknown name. The inner
    /// detail is logged server-side and never sent to the client.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Outbound fetch failure. The inner detail is logged server-side only.
    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Unauthorized(detail) => {
                warn!(detail = %detail, "Rejecting request as unauthorized");
                // One body for every authentication failure so clients
                // cannot tell missing, malformed and expired tokens apart
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(detail) => {
                error!(detail = %detail, "Upstream fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error retrieving data".to_string(),
                )
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_unauthorized_hides_detail() {
        let response =
            AppError::Unauthorized("token expired at 1234".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Invalid credentials"}));
    }

    #[tokio::test]
    async fn test_upstream_hides_detail() {
        let response =
            AppError::Upstream("connect refused: 10.0.0.1:443".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Error retrieving data"}));
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "User not found"}));
    }
}
