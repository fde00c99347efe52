use crate::response::ApiError;
use crate::routes::tickets::common::{TicketEnvelope, TicketResponse, ticket_service};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
};
use db::{filters::TicketFilter, repositories::ticket_repository::TicketStats};
use serde::{Deserialize, Serialize};
use util::state::AppState;

/// Raw listing parameters. Every field is optional and free-form; unknown
/// values fall back to defaults instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListTicketsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl From<&ListTicketsQuery> for TicketFilter {
    fn from(query: &ListTicketsQuery) -> Self {
        TicketFilter::from_params(
            query.status.as_deref(),
            query.search.as_deref(),
            query.sort_by.as_deref(),
            query.sort_direction.as_deref(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketResponse>,
    pub stats: TicketStats,
}

/// GET /api/tickets
///
/// Lists tickets, optionally filtered and sorted.
///
/// ### Query Parameters
/// - `status`: `open` or `closed`. Any other value is ignored.
/// - `search`: case-insensitive substring matched against `customer_name`
///   and `issue_description`.
/// - `sort_by`: `customer_name`, `priority`, `status`, `created_at` (default)
///   or `updated_at`. Any other value means `created_at`.
/// - `sort_direction`: `asc`; anything else means descending.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "tickets": [
///     {
///       "id": 1,
///       "customer_name": "John Doe",
///       "issue_description": "Payment not processed for order #12345",
///       "priority": "high",
///       "status": "open",
///       "created_at": "2025-05-23T18:00:00+00:00",
///       "updated_at": "2025-05-23T18:00:00+00:00"
///     }
///   ],
///   "stats": { "total": 3, "open": 2, "closed": 1 }
/// }
/// ```
///
/// `stats` always counts the whole table, whatever the filter.
pub async fn list_tickets(
    State(app_state): State<AppState>,
    Query(params): Query<ListTicketsQuery>,
) -> Result<Json<TicketListResponse>, ApiError> {
    let filter = TicketFilter::from(&params);
    let (tickets, stats) = ticket_service(&app_state).list(&filter).await?;

    Ok(Json(TicketListResponse {
        tickets: tickets.into_iter().map(TicketResponse::from).collect(),
        stats,
    }))
}

/// GET /api/tickets/{ticket_id}
///
/// ### Responses
/// - `200 OK` → `{ "ticket": { ... } }`
/// - `404 Not Found` → `{ "message": "Ticket not found" }`, also for ids that
///   are not integers.
pub async fn get_ticket(
    State(app_state): State<AppState>,
    ticket_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TicketEnvelope>, ApiError> {
    let Path(ticket_id) = ticket_id.map_err(|_| ticket_not_found())?;
    let ticket = ticket_service(&app_state).get(ticket_id).await?;
    Ok(Json(TicketEnvelope::new(ticket)))
}

pub(crate) fn ticket_not_found() -> ApiError {
    ApiError::NotFound("Ticket not found".into())
}
