use axum::{extract::State, Json};
use serde_json::Value;
use tracing::{info, instrument};

use crate::shared::{AppError, AppState};

/// HTTP handler for the proxied data fetch
///
/// GET /data
/// Relays the upstream JSON body verbatim on success; any upstream
/// failure becomes a generic 500 with the cause logged server-side.
#[instrument(name = "fetch_data", skip(state))]
pub async fn fetch_data(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    info!("Fetching upstream data");

    let data = state.upstream.fetch().await?;

    Ok(Json(data))
}
