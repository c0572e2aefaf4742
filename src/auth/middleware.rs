use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, instrument, warn};

use crate::shared::{AppError, AppState};
use crate::user::repository::UserRepository;

/// JWT authentication middleware - validates the Authorization Bearer
/// header, resolves the token subject against the user store and adds the
/// resolved `UserModel` to request extensions.
/// Usage: .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_auth))
/// Handlers can then extract Extension(user): Extension<UserModel>.
///
/// Every rejection path produces the same 401 response body; the concrete
/// cause (missing header, bad format, invalid token, unknown subject) is
/// only visible in the logs.
#[instrument(skip(state, req, next))]
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    debug!(uri = %req.uri(), "Authenticating request");

    // Extract token from Authorization Bearer header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing Authorization header in request");
            AppError::Unauthorized("missing authorization header".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Invalid Authorization header format (expected Bearer token)");
        AppError::Unauthorized("invalid authorization header format".to_string())
    })?;

    let claims = state.token_config.verify(token)?;

    // A valid token whose subject no longer exists is rejected exactly
    // like an invalid token
    let user = state
        .user_repository
        .find_by_id(claims.sub)
        .await?
        .ok_or_else(|| {
            warn!(subject_id = claims.sub, "Valid token for unknown subject");
            AppError::Unauthorized("token subject not found".to_string())
        })?;

    debug!(
        user_id = user.id,
        name = %user.name,
        "Authentication successful, adding user to request"
    );

    // Add the resolved user to request extensions for handlers to use
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
