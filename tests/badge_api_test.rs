//! HTTP badge store tests against a mock server.

use std::sync::Arc;
use std::time::Duration;

use fittrack::adapters::badge_api::{BadgeApiConfig, HttpBadgeStore};
use fittrack::domain::ports::BadgeStore;
use fittrack::services::{AwardOutcome, BadgeAwardService};
use mockito::Server;
use uuid::Uuid;

fn store_for(server: &Server) -> HttpBadgeStore {
    HttpBadgeStore::new(BadgeApiConfig {
        base_url: server.url(),
        timeout: Duration::from_secs(2),
    })
    .expect("client builds")
}

fn badge_body(id: Uuid, name: &str, user_id: Uuid) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "iconUrl": format!("/images/{}.png", name.replace(' ', "")),
        "userId": user_id,
    })
    .to_string()
}

#[tokio::test]
async fn award_posts_the_wire_format_and_parses_the_badge() {
    let mut server = Server::new_async().await;
    let user_id = Uuid::new_v4();
    let badge_id = Uuid::new_v4();

    let mock = server
        .mock("POST", "/badges")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "Goal Master",
            "iconUrl": "/images/GoalMaster.png",
            "userId": user_id,
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(badge_body(badge_id, "Goal Master", user_id))
        .create_async()
        .await;

    let store = store_for(&server);
    let badge = store
        .award(user_id, "Goal Master", "/images/GoalMaster.png")
        .await
        .expect("award succeeds");

    assert_eq!(badge.id, badge_id);
    assert_eq!(badge.name, "Goal Master");
    assert_eq!(badge.user_id, user_id);
    mock.assert_async().await;
}

#[tokio::test]
async fn list_for_user_hits_the_user_path() {
    let mut server = Server::new_async().await;
    let user_id = Uuid::new_v4();

    let mock = server
        .mock("GET", format!("/badges/user/{user_id}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            "[{},{}]",
            badge_body(Uuid::new_v4(), "First Workout", user_id),
            badge_body(Uuid::new_v4(), "Goal Setter", user_id),
        ))
        .create_async()
        .await;

    let store = store_for(&server);
    let badges = store.list_for_user(user_id).await.expect("list succeeds");

    assert_eq!(badges.len(), 2);
    assert_eq!(badges[0].name, "First Workout");
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_returns_ok_on_no_content() {
    let mut server = Server::new_async().await;
    let badge_id = Uuid::new_v4();

    let mock = server
        .mock("DELETE", format!("/badges/{badge_id}").as_str())
        .with_status(204)
        .create_async()
        .await;

    let store = store_for(&server);
    store.delete(badge_id).await.expect("delete succeeds");
    mock.assert_async().await;
}

#[tokio::test]
async fn server_errors_surface_as_errors() {
    let mut server = Server::new_async().await;
    let user_id = Uuid::new_v4();

    server
        .mock("GET", format!("/badges/user/{user_id}").as_str())
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let store = store_for(&server);
    let err = store.list_for_user(user_id).await.unwrap_err();
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn award_boundary_degrades_a_failing_store() {
    let mut server = Server::new_async().await;
    let user_id = Uuid::new_v4();

    // Both the existence check and the award call fail.
    server
        .mock("GET", format!("/badges/user/{user_id}").as_str())
        .with_status(503)
        .create_async()
        .await;
    server
        .mock("POST", "/badges")
        .with_status(503)
        .create_async()
        .await;

    let awards = BadgeAwardService::new(Arc::new(store_for(&server)));
    let spec = fittrack::BadgeSpec {
        name: "Goal Master",
        icon_url: "/images/GoalMaster.png",
    };
    let outcome = awards.award_if_absent(user_id, &spec).await;
    assert_eq!(outcome, AwardOutcome::Degraded);
}

#[tokio::test]
async fn revoke_swallows_not_found() {
    let mut server = Server::new_async().await;
    let badge_id = Uuid::new_v4();

    let mock = server
        .mock("DELETE", format!("/badges/{badge_id}").as_str())
        .with_status(404)
        .with_body(r#"{"message":"Badge not found"}"#)
        .create_async()
        .await;

    let awards = BadgeAwardService::new(Arc::new(store_for(&server)));
    // Best-effort: no panic, no error surfaced.
    awards.revoke(badge_id).await;
    mock.assert_async().await;
}
