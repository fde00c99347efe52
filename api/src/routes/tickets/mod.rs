//! # Ticket Routes Module
//!
//! Wires up the `/tickets` endpoint group.
//!
//! ## Structure
//! - `common.rs`: request/response DTOs and the validation gate
//! - `get.rs`: listing with filters/sorting, single ticket lookup
//! - `post.rs`: ticket creation
//! - `put.rs`: full ticket update
//! - `delete.rs`: ticket removal

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{Router, routing::get};
use util::state::AppState;

use delete::delete_ticket;
use get::{get_ticket, list_tickets};
use post::create_ticket;
use put::update_ticket;

/// Builds the `/tickets` route group.
///
/// - `GET /tickets` → `list_tickets`
/// - `POST /tickets` → `create_ticket`
/// - `GET /tickets/{ticket_id}` → `get_ticket`
/// - `PUT /tickets/{ticket_id}` → `update_ticket`
/// - `DELETE /tickets/{ticket_id}` → `delete_ticket`
pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route(
            "/{ticket_id}",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
}
