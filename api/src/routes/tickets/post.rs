use crate::response::ApiError;
use crate::routes::tickets::common::{
    CreateTicketRequest, TicketEnvelope, ticket_service, validate_create,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use util::state::AppState;

/// POST /api/tickets
///
/// Creates a ticket. New tickets are always `open`; a `status` in the body is ignored.
///
/// ### Request Body
/// ```json
/// {
///   "customer_name": "Ada",
///   "issue_description": "Printer jam",
///   "priority": "low"
/// }
/// ```
///
/// ### Validation Rules
/// * `customer_name`: required string, non-blank after trimming, at most 255 characters
/// * `issue_description`: required string, non-blank after trimming
/// * `priority`: required, one of `low`, `medium`, `high`
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "ticket": { "id": 4, "customer_name": "Ada", "priority": "low", "status": "open", ... },
///   "message": "Ticket created successfully"
/// }
/// ```
///
/// - `422 Unprocessable Entity`
/// ```json
/// {
///   "errors": {
///     "issue_description": "The issue description field is required.",
///     "priority": "The selected priority is invalid."
///   }
/// }
/// ```
pub async fn create_ticket(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateTicketRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TicketEnvelope>), ApiError> {
    let Json(req) = payload?;
    let params = validate_create(req).map_err(ApiError::Validation)?;

    let ticket = ticket_service(&app_state).create(params).await?;
    Ok((
        StatusCode::CREATED,
        Json(TicketEnvelope::with_message(ticket, "Ticket created successfully")),
    ))
}
