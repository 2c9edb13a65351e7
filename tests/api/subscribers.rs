use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TestApp, UnreachableStore};

#[tokio::test]
async fn listing_an_empty_store_returns_an_empty_array() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/subscribers").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "data": []}));
}

#[tokio::test]
async fn listing_returns_the_newest_subscriber_first() {
    let app = TestApp::spawn().await;
    let first = app.create_subscriber("first@example.com").await;
    let second = app.create_subscriber("second@example.com").await;

    let body: serde_json::Value = app.get("/api/subscribers").await.json().await.unwrap();
    let ids: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn a_subscriber_can_be_fetched_by_id() {
    let app = TestApp::spawn().await;
    let id = app.create_subscriber("ursula@example.com").await;

    let response = app.get(&format!("/api/subscribers/{id}")).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["email"], "ursula@example.com");
    assert!(body["data"]["subscriptionDate"].is_string());
}

#[tokio::test]
async fn fetching_an_unknown_subscriber_returns_a_404() {
    let app = TestApp::spawn().await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let response = app.get(&format!("/api/subscribers/{id}")).await;
        assert_eq!(response.status().as_u16(), 404);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({"success": false, "errors": ["Subscriber not found"]})
        );
    }
}

#[tokio::test]
async fn deleting_a_subscriber_removes_it() {
    let app = TestApp::spawn().await;
    let id = app.create_subscriber("ursula@example.com").await;

    let response = app.delete(&format!("/api/subscribers/{id}")).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "message": "Subscriber deleted"}));

    let response = app.get(&format!("/api/subscribers/{id}")).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn deleting_an_unknown_subscriber_is_reported_with_a_200() {
    let app = TestApp::spawn().await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let response = app.delete(&format!("/api/subscribers/{id}")).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({"success": false, "message": "Subscriber not found"})
        );
    }
}

#[tokio::test]
async fn admin_endpoints_return_a_500_when_the_store_is_unreachable() {
    let app = TestApp::spawn_with_store(UnreachableStore).await;
    let id = Uuid::new_v4();

    let responses = vec![
        app.get("/api/subscribers").await,
        app.get(&format!("/api/subscribers/{id}")).await,
        app.delete(&format!("/api/subscribers/{id}")).await,
    ];

    for response in responses {
        assert_eq!(response.status().as_u16(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({"success": false, "errors": ["An internal error occurred"]})
        );
    }
}
