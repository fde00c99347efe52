use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use db::{models::tickets::Priority, test_utils::setup_test_db};
use serde_json::Value;
use services::ticket_service::{CreateTicket, Ticket, TicketService};
use tower::ServiceExt;
use util::state::AppState;

/// The full application over a fresh in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db);
    (api::app(app_state.clone()), app_state)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends a request and decodes the JSON body.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn seed_ticket(
    app_state: &AppState,
    customer_name: &str,
    issue_description: &str,
    priority: Priority,
) -> Ticket {
    TicketService::from_db(app_state.db_clone())
        .create(CreateTicket {
            customer_name: customer_name.into(),
            issue_description: issue_description.into(),
            priority,
        })
        .await
        .expect("Failed to seed ticket")
}
