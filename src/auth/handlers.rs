use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::AuthService,
    types::{LoginRequest, LoginResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for logging in
///
/// POST /login
/// Looks the user up by name and returns a signed access token on a hit;
/// an unknown name gets the same 401 as any other authentication failure.
#[instrument(name = "login", skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    info!(name = %request.name, "Login attempt");

    let service = AuthService::new(
        Arc::clone(&state.user_repository),
        state.token_config.clone(),
    );
    let response = service.login(&request.name).await?;

    Ok(Json(response))
}
