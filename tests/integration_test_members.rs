mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

async fn setup() -> (TestApp, i64, i64, i64) {
    let app = TestApp::new().await;
    let alice = app.register("uid-alice", "Alice Agutu", "+1000").await;
    let bob = app.register("uid-bob", "Bob Baraka", "+2000").await;

    let group = app.create_group("uid-alice", "Savers", "Weekly savings").await;

    (
        app,
        group["id"].as_i64().unwrap(),
        alice["id"].as_i64().unwrap(),
        bob["id"].as_i64().unwrap(),
    )
}

#[tokio::test]
async fn test_member_can_add_another_user() {
    let (app, group_id, _alice_id, bob_id) = setup().await;

    let (status, member) = app
        .send(
            "POST",
            &format!("/groups/{}/members/", group_id),
            Some("uid-alice"),
            Some(json!({ "user_id": bob_id })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["group_id"].as_i64().unwrap(), group_id);
    assert_eq!(member["user_id"].as_i64().unwrap(), bob_id);

    let (status, members) = app
        .send("GET", &format!("/groups/{}/members/", group_id), Some("uid-alice"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members.as_array().unwrap().len(), 2);
    assert_eq!(members[0]["role"], "admin");
    assert_eq!(members[1]["role"], "member");
}

#[tokio::test]
async fn test_non_member_cannot_add_users() {
    let (app, group_id, _alice_id, bob_id) = setup().await;
    let carol = app.register("uid-carol", "Carol Chebet", "+3000").await;

    let (status, _) = app
        .send(
            "POST",
            &format!("/groups/{}/members/", group_id),
            Some("uid-carol"),
            Some(json!({ "user_id": bob_id })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The requester being a member does not help for an unknown target.
    let (status, _) = app
        .send(
            "POST",
            &format!("/groups/{}/members/", group_id),
            Some("uid-alice"),
            Some(json!({ "user_id": carol["id"].as_i64().unwrap() + 999 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_adding_existing_member_conflicts() {
    let (app, group_id, alice_id, _bob_id) = setup().await;

    let (status, _) = app
        .send(
            "POST",
            &format!("/groups/{}/members/", group_id),
            Some("uid-alice"),
            Some(json!({ "user_id": alice_id })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_member_can_remove_self() {
    let (app, group_id, _alice_id, bob_id) = setup().await;

    app.send(
        "POST",
        &format!("/groups/{}/members/", group_id),
        Some("uid-alice"),
        Some(json!({ "user_id": bob_id })),
    )
    .await;

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/groups/{}/members/{}/", group_id, bob_id),
            Some("uid-bob"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, members) = app
        .send("GET", &format!("/groups/{}/members/", group_id), Some("uid-alice"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_only_creator_may_remove_others() {
    let (app, group_id, _alice_id, bob_id) = setup().await;
    let carol = app.register("uid-carol", "Carol Chebet", "+3000").await;
    let carol_id = carol["id"].as_i64().unwrap();

    for user_id in [bob_id, carol_id] {
        app.send(
            "POST",
            &format!("/groups/{}/members/", group_id),
            Some("uid-alice"),
            Some(json!({ "user_id": user_id })),
        )
        .await;
    }

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/groups/{}/members/{}/", group_id, carol_id),
            Some("uid-bob"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/groups/{}/members/{}/", group_id, carol_id),
            Some("uid-alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_creator_can_never_be_removed() {
    let (app, group_id, alice_id, _bob_id) = setup().await;

    // Even the creator removing themselves is structurally disallowed.
    let (status, _) = app
        .send(
            "DELETE",
            &format!("/groups/{}/members/{}/", group_id, alice_id),
            Some("uid-alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_removing_non_member_is_not_found() {
    let (app, group_id, _alice_id, bob_id) = setup().await;

    let (status, _) = app
        .send(
            "DELETE",
            &format!("/groups/{}/members/{}/", group_id, bob_id),
            Some("uid-alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_available_users_excludes_current_members() {
    let (app, group_id, _alice_id, bob_id) = setup().await;
    app.register("uid-carol", "Carol Chebet", "+3000").await;

    let (status, available) = app
        .send("GET", &format!("/groups/{}/available-users", group_id), Some("uid-alice"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = available
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["full_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bob Baraka", "Carol Chebet"]);

    app.send(
        "POST",
        &format!("/groups/{}/members/", group_id),
        Some("uid-alice"),
        Some(json!({ "user_id": bob_id })),
    )
    .await;

    let (_, available) = app
        .send("GET", &format!("/groups/{}/available-users", group_id), Some("uid-alice"), None)
        .await;
    assert_eq!(available.as_array().unwrap().len(), 1);
    assert_eq!(available[0]["full_name"], "Carol Chebet");

    let (status, _) = app
        .send("GET", &format!("/groups/{}/available-users", group_id), Some("uid-carol"), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
