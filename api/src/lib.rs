pub mod middleware;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;
use util::state::AppState;

/// The full application: `/api` routes, request logging and CORS.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::routes(app_state))
        .layer(from_fn(middleware::log_request))
        .layer(CorsLayer::very_permissive())
}
