use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth, proxy, shared::AppState, user};

/// Builds the full application router.
///
/// `/login` and `/hello` are public; everything else sits behind the JWT
/// middleware. Handler errors all funnel through `AppError`'s response
/// conversion, which is the single place failures become HTTP statuses.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/data", get(proxy::fetch_data))
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/:id",
            put(user::update_user).delete(user::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/login", post(auth::login))
        .route("/hello", get(hello))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Public liveness check
async fn hello() -> &'static str {
    "Hello, world!"
}
