use crate::response::{ApiError, MessageResponse};
use crate::routes::tickets::common::ticket_service;
use crate::routes::tickets::get::ticket_not_found;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use util::state::AppState;

/// DELETE /api/tickets/{ticket_id}
///
/// Permanently removes a ticket. Deleting an id that does not exist (or no
/// longer exists) is a `404`, not a silent success.
///
/// ### Responses
/// - `200 OK` → `{ "message": "Ticket deleted successfully" }`
/// - `404 Not Found` → `{ "message": "Ticket not found" }`
pub async fn delete_ticket(
    State(app_state): State<AppState>,
    ticket_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(ticket_id) = ticket_id.map_err(|_| ticket_not_found())?;
    ticket_service(&app_state).delete(ticket_id).await?;
    Ok(Json(MessageResponse::new("Ticket deleted successfully")))
}
