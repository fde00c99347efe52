#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, seed_ticket, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::tickets::Priority;

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn delete_removes_ticket() {
        let (app, app_state) = make_test_app().await;
        let ticket = seed_ticket(&app_state, "Ada", "Printer jam", Priority::Low).await;
        let uri = format!("/api/tickets/{}", ticket.id);

        let (status, json) = send(&app, request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Ticket deleted successfully");

        let (status, json) = send(&app, request("GET", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");
    }

    #[tokio::test]
    async fn second_delete_is_404() {
        let (app, app_state) = make_test_app().await;
        let ticket = seed_ticket(&app_state, "Ada", "Printer jam", Priority::Low).await;
        let uri = format!("/api/tickets/{}", ticket.id);

        send(&app, request("DELETE", &uri)).await;
        let (status, _) = send(&app, request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_updates_stats() {
        let (app, app_state) = make_test_app().await;
        let ada = seed_ticket(&app_state, "Ada", "Printer jam", Priority::Low).await;
        seed_ticket(&app_state, "Bob", "Cannot log in", Priority::High).await;

        send(&app, request("DELETE", &format!("/api/tickets/{}", ada.id))).await;

        let (_, json) = send(&app, request("GET", "/api/tickets")).await;
        assert_eq!(json["stats"]["total"], 1);
        assert_eq!(json["tickets"][0]["customer_name"], "Bob");
    }

    #[tokio::test]
    async fn delete_non_numeric_id_is_404() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(&app, request("DELETE", "/api/tickets/abc")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");
    }
}
