//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/tickets` → Ticket listing, lookup, creation, update and deletion

use crate::routes::{health::health_routes, tickets::ticket_routes};
use axum::Router;
use util::state::AppState;

pub mod health;
pub mod tickets;

/// Builds the router for every endpoint under `/api`, with state attached.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/tickets", ticket_routes())
        .with_state(app_state)
}
