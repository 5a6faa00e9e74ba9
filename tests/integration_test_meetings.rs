mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_member_schedules_and_lists_meetings() {
    let app = TestApp::new().await;
    app.register("uid-alice", "Alice Agutu", "+1000").await;

    let group = app.create_group("uid-alice", "Savers", "Weekly savings").await;
    let group_id = group["id"].as_i64().unwrap();

    let when = (Utc::now() + Duration::days(7)).to_rfc3339();
    let (status, meeting) = app
        .send(
            "POST",
            &format!("/groups/{}/meetings/", group_id),
            Some("uid-alice"),
            Some(json!({ "topic": "Monthly review", "meeting_datetime": when })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(meeting["topic"], "Monthly review");

    let (status, meetings) = app
        .send("GET", &format!("/groups/{}/meetings/", group_id), Some("uid-alice"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(meetings.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_non_member_cannot_schedule() {
    let app = TestApp::new().await;
    app.register("uid-alice", "Alice Agutu", "+1000").await;
    app.register("uid-bob", "Bob Baraka", "+2000").await;

    let group = app.create_group("uid-alice", "Savers", "Weekly savings").await;
    let group_id = group["id"].as_i64().unwrap();

    let when = (Utc::now() + Duration::days(7)).to_rfc3339();
    let (status, _) = app
        .send(
            "POST",
            &format!("/groups/{}/meetings/", group_id),
            Some("uid-bob"),
            Some(json!({ "topic": "Takeover", "meeting_datetime": when })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_meeting_in_missing_group_is_not_found() {
    let app = TestApp::new().await;
    app.register("uid-alice", "Alice Agutu", "+1000").await;

    let when = Utc::now().to_rfc3339();
    let (status, _) = app
        .send(
            "POST",
            "/groups/4242/meetings/",
            Some("uid-alice"),
            Some(json!({ "topic": "Nowhere", "meeting_datetime": when })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
