use crate::response::ApiError;
use crate::routes::tickets::common::{
    TicketEnvelope, UpdateTicketRequest, ticket_service, validate_update,
};
use crate::routes::tickets::get::ticket_not_found;
use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
};
use util::state::AppState;

/// PUT /api/tickets/{ticket_id}
///
/// Replaces all four business fields of a ticket. There is no partial update:
/// every field below must be present.
///
/// ### Request Body
/// ```json
/// {
///   "customer_name": "Ada",
///   "issue_description": "Printer jam",
///   "priority": "high",
///   "status": "closed"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` → `{ "ticket": { ... }, "message": "Ticket updated successfully" }`
/// - `422 Unprocessable Entity` → `{ "errors": { ... } }`. Checked before the
///   ticket is looked up.
/// - `404 Not Found` → `{ "message": "Ticket not found" }`
pub async fn update_ticket(
    State(app_state): State<AppState>,
    ticket_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTicketRequest>, JsonRejection>,
) -> Result<Json<TicketEnvelope>, ApiError> {
    let Json(req) = payload?;
    let params = validate_update(req).map_err(ApiError::Validation)?;
    let Path(ticket_id) = ticket_id.map_err(|_| ticket_not_found())?;

    let ticket = ticket_service(&app_state).update(ticket_id, params).await?;
    Ok(Json(TicketEnvelope::with_message(
        ticket,
        "Ticket updated successfully",
    )))
}
