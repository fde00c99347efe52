#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, seed_ticket, send};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::tickets::{Priority, TicketStatus};
    use serde_json::Value;
    use services::ticket_service::{Ticket, TicketService, UpdateTicket};
    use std::time::Duration;
    use util::state::AppState;

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, req).await
    }

    fn names(json: &Value) -> Vec<String> {
        json["tickets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["customer_name"].as_str().unwrap().to_owned())
            .collect()
    }

    /// Bob (high, open), Ada (low, closed), Cy (medium, open), in that
    /// creation order. Ada is closed after Cy is created.
    async fn seed(app_state: &AppState) -> Vec<Ticket> {
        let bob = seed_ticket(app_state, "Bob", "Cannot log in", Priority::High).await;
        let ada = seed_ticket(app_state, "Ada", "Printer jam", Priority::Low).await;
        let cy = seed_ticket(app_state, "Cy", "Refund for order #42", Priority::Medium).await;

        tokio::time::sleep(Duration::from_millis(5)).await;
        let ada = TicketService::from_db(app_state.db_clone())
            .update(
                ada.id,
                UpdateTicket {
                    customer_name: "Ada".into(),
                    issue_description: "Printer jam".into(),
                    priority: Priority::Low,
                    status: TicketStatus::Closed,
                },
            )
            .await
            .unwrap();

        vec![bob, ada, cy]
    }

    #[tokio::test]
    async fn empty_listing_has_zero_stats() {
        let (app, _) = make_test_app().await;

        let (status, json) = get(&app, "/api/tickets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tickets"], serde_json::json!([]));
        assert_eq!(json["stats"]["total"], 0);
        assert_eq!(json["stats"]["open"], 0);
        assert_eq!(json["stats"]["closed"], 0);
    }

    #[tokio::test]
    async fn default_listing_is_newest_first() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (status, json) = get(&app, "/api/tickets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&json), vec!["Cy", "Ada", "Bob"]);
        assert_eq!(json["stats"]["total"], 3);
        assert_eq!(json["stats"]["open"], 2);
        assert_eq!(json["stats"]["closed"], 1);
    }

    #[tokio::test]
    async fn status_filter_keeps_stats_over_whole_table() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (status, json) = get(&app, "/api/tickets?status=closed").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&json), vec!["Ada"]);
        assert_eq!(json["tickets"][0]["status"], "closed");
        assert_eq!(json["stats"]["total"], 3);
        assert_eq!(json["stats"]["closed"], 1);
    }

    #[tokio::test]
    async fn unknown_status_filter_is_ignored() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (_, json) = get(&app, "/api/tickets?status=pending").await;
        assert_eq!(json["tickets"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn search_matches_either_text_field_case_insensitively() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (_, by_name) = get(&app, "/api/tickets?search=ADA").await;
        assert_eq!(names(&by_name), vec!["Ada"]);

        let (_, by_issue) = get(&app, "/api/tickets?search=order%20%2342").await;
        assert_eq!(names(&by_issue), vec!["Cy"]);

        let (_, none) = get(&app, "/api/tickets?search=zzz").await;
        assert!(names(&none).is_empty());
        assert_eq!(none["stats"]["total"], 3);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (_, json) = get(&app, "/api/tickets?search=%25").await;
        assert!(names(&json).is_empty());
    }

    #[tokio::test]
    async fn search_and_status_combine() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        // All three issue descriptions contain an "n"; Ada's ticket is closed.
        let (_, json) = get(&app, "/api/tickets?status=open&search=n").await;
        assert_eq!(names(&json), vec!["Cy", "Bob"]);
    }

    #[tokio::test]
    async fn sorts_by_customer_name_ascending() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (_, json) = get(&app, "/api/tickets?sort_by=customer_name&sort_direction=asc").await;
        assert_eq!(names(&json), vec!["Ada", "Bob", "Cy"]);
    }

    #[tokio::test]
    async fn unknown_direction_means_descending() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (_, bogus) = get(&app, "/api/tickets?sort_by=customer_name&sort_direction=sideways").await;
        let (_, desc) = get(&app, "/api/tickets?sort_by=customer_name&sort_direction=desc").await;
        assert_eq!(names(&bogus), vec!["Cy", "Bob", "Ada"]);
        assert_eq!(names(&bogus), names(&desc));
    }

    #[tokio::test]
    async fn priority_sorts_by_severity() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (_, asc) = get(&app, "/api/tickets?sort_by=priority&sort_direction=asc").await;
        assert_eq!(names(&asc), vec!["Ada", "Cy", "Bob"]);

        let (_, desc) = get(&app, "/api/tickets?sort_by=priority").await;
        assert_eq!(names(&desc), vec!["Bob", "Cy", "Ada"]);
    }

    #[tokio::test]
    async fn sorts_by_updated_at() {
        let (app, app_state) = make_test_app().await;
        let tickets = seed(&app_state).await;

        tokio::time::sleep(Duration::from_millis(5)).await;
        let bob = &tickets[0];
        TicketService::from_db(app_state.db_clone())
            .update(
                bob.id,
                UpdateTicket {
                    customer_name: bob.customer_name.clone(),
                    issue_description: "Cannot log in after password reset".into(),
                    priority: bob.priority,
                    status: bob.status,
                },
            )
            .await
            .unwrap();

        let (_, asc) = get(&app, "/api/tickets?sort_by=updated_at&sort_direction=asc").await;
        assert_eq!(names(&asc), vec!["Cy", "Ada", "Bob"]);

        let (_, desc) = get(&app, "/api/tickets?sort_by=updated_at&sort_direction=desc").await;
        assert_eq!(names(&desc), vec!["Bob", "Ada", "Cy"]);
    }

    #[tokio::test]
    async fn unknown_sort_field_falls_back_to_created_at() {
        let (app, app_state) = make_test_app().await;
        seed(&app_state).await;

        let (_, json) = get(&app, "/api/tickets?sort_by=password&sort_direction=asc").await;
        assert_eq!(names(&json), vec!["Bob", "Ada", "Cy"]);
    }

    #[tokio::test]
    async fn show_returns_ticket() {
        let (app, app_state) = make_test_app().await;
        let ticket = seed_ticket(&app_state, "Ada", "Printer jam", Priority::Low).await;

        let (status, json) = get(&app, &format!("/api/tickets/{}", ticket.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ticket"]["id"], ticket.id);
        assert_eq!(json["ticket"]["customer_name"], "Ada");
        assert_eq!(json["ticket"]["priority"], "low");
        assert_eq!(json["ticket"]["status"], "open");
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn show_missing_ticket_is_404() {
        let (app, _) = make_test_app().await;

        let (status, json) = get(&app, "/api/tickets/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");
    }

    #[tokio::test]
    async fn show_non_numeric_id_is_404() {
        let (app, _) = make_test_app().await;

        let (status, json) = get(&app, "/api/tickets/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");
    }
}
