use docket::http::MockHttpClient;
use docket::{ClientConfig, ComplaintId, ComplaintStatus, ListDisplay, Session, View};
use std::sync::Arc;

fn complaint_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": "resident-42",
        "title": title,
        "description": "Large pothole causing damage",
        "category_id": "road_maintenance",
        "priority_id": "medium",
        "status": "open",
        "created_at": "2024-06-01T08:00:00",
        "updated_at": "2024-06-01T08:00:00"
    })
}

fn session_with_mock() -> (Arc<MockHttpClient>, Session<MockHttpClient>) {
    let http_client = Arc::new(MockHttpClient::new());
    let config = ClientConfig {
        user_id: "resident-42".to_string(),
        ..Default::default()
    };
    let session = Session::with_client(config, http_client.clone());
    (http_client, session)
}

#[test_log::test(tokio::test)]
async fn test_session_starts_on_empty_list() {
    let (http_client, session) = session_with_mock();

    assert_eq!(session.active_view(), View::List);
    assert_eq!(session.config().user_id, "resident-42");
    assert_eq!(session.list().display(), ListDisplay::Empty);
    assert_eq!(session.form().user_id(), "resident-42");
    assert_eq!(http_client.call_count(), 0);
}

#[test_log::test(tokio::test)]
async fn test_showing_create_view_loads_categories_only() {
    let (http_client, mut session) = session_with_mock();
    http_client.add_json(
        "GET /categories",
        200,
        serde_json::json!({"categories": [{"id": "general", "name": "General"}]}),
    );

    session.show(View::Create).await;

    assert_eq!(session.active_view(), View::Create);
    assert_eq!(http_client.call_count(), 1);
    assert_eq!(session.store().state().categories.len(), 1);
}

#[test_log::test(tokio::test)]
async fn test_submit_switches_back_to_list() {
    let (http_client, mut session) = session_with_mock();
    http_client.add_json("GET /categories", 200, serde_json::json!({"categories": []}));
    session.show(View::Create).await;

    http_client.add_json(
        "POST /complaints",
        201,
        serde_json::json!({"complaint": complaint_json("c-1", "Pothole on Main St")}),
    );
    http_client.add_json(
        "GET /complaints",
        200,
        serde_json::json!({"complaints": [
            complaint_json("c-1", "Pothole on Main St"),
            complaint_json("c-0", "Older"),
        ]}),
    );
    http_client.add_json("GET /categories", 200, serde_json::json!({"categories": []}));
    http_client.add_json("GET /priorities", 200, serde_json::json!({"priorities": []}));

    session.form_mut().set_title("Pothole on Main St");
    session
        .form_mut()
        .set_description("Large pothole causing damage");
    let created = session.submit_form().await.unwrap();

    assert_eq!(session.active_view(), View::List);
    let post = http_client
        .get_calls()
        .into_iter()
        .find(|call| call.method == "POST")
        .unwrap();
    assert_eq!(post.json_body().unwrap()["user_id"], "resident-42");

    let state = session.store().state();
    assert_eq!(state.complaints[0], created);
    assert_eq!(state.complaints.len(), 2);
    assert!(!state.loading);
}

#[test_log::test(tokio::test)]
async fn test_invalid_submit_stays_on_form() {
    let (http_client, mut session) = session_with_mock();
    http_client.add_json("GET /categories", 200, serde_json::json!({"categories": []}));
    session.show(View::Create).await;

    session.form_mut().set_title("Pothole");
    let err = session.submit_form().await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(session.active_view(), View::Create);
    assert_eq!(http_client.call_count(), 1);
}

#[test_log::test(tokio::test)]
async fn test_subscribers_observe_dispatches() {
    let (http_client, session) = session_with_mock();
    http_client.add_json(
        "GET /complaints",
        500,
        serde_json::json!({"error": "db unavailable"}),
    );

    let mut updates = session.store().subscribe();
    session.list().load_complaints().await;

    assert!(updates.has_changed().unwrap());
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.error.as_deref(), Some("db unavailable"));
    assert!(!snapshot.loading);
}

#[test_log::test(tokio::test)]
async fn test_status_editor_and_api_share_session_store() {
    let (http_client, mut session) = session_with_mock();
    http_client.add_json(
        "GET /complaints",
        200,
        serde_json::json!({"complaints": [
            complaint_json("c-1", "Pothole on Main St"),
            complaint_json("c-2", "Broken streetlight"),
        ]}),
    );
    http_client.add_json("GET /categories", 200, serde_json::json!({"categories": []}));
    http_client.add_json("GET /priorities", 200, serde_json::json!({"priorities": []}));
    session.show(View::List).await;
    http_client.clear_calls();

    let mut resolved = complaint_json("c-2", "Broken streetlight");
    resolved["status"] = serde_json::json!("resolved");
    resolved["updated_at"] = serde_json::json!("2024-06-02T12:00:00");
    http_client.add_json(
        "PUT /complaints/c-2",
        200,
        serde_json::json!({"complaint": resolved}),
    );

    session
        .status_editor()
        .change_status(&ComplaintId::from("c-2"), ComplaintStatus::Resolved)
        .await
        .unwrap();

    let state = session.store().state();
    let updated = state.complaint("c-2").unwrap();
    assert_eq!(updated.status, ComplaintStatus::Resolved);
    assert!(updated.was_updated());
    assert_eq!(
        state.complaint("c-1").unwrap().status,
        ComplaintStatus::Open
    );
    assert!(state.complaint("c-3").is_none());

    http_client.add_json(
        "DELETE /complaints/c-1",
        200,
        serde_json::json!({"status": "success", "message": "Complaint deleted successfully"}),
    );
    let confirmation = session
        .api()
        .delete_complaint(&ComplaintId::from("c-1"))
        .await
        .unwrap();
    assert_eq!(confirmation.status.as_deref(), Some("success"));

    let calls = http_client.get_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, "PUT");
    assert_eq!(calls[1].method, "DELETE");
}
