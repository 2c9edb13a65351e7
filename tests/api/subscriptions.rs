use serde_json::json;

use crate::helpers::{TestApp, UnreachableStore};

#[tokio::test]
async fn subscribe_returns_a_200_for_valid_data() {
    let app = TestApp::spawn().await;
    let body = json!({"email": "jean.dupont@example.com", "firstName": "Jean", "lastName": "Dupont"});

    let response = app.post_subscribe(&body).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["errors"], json!([]));
    assert_eq!(body["message"], "Welcome Jean Dupont! Thank you for subscribing.");
    assert_eq!(body["subscriber"]["email"], "jean.dupont@example.com");
    assert_eq!(body["subscriber"]["firstName"], "Jean");
    assert_eq!(body["subscriber"]["lastName"], "Dupont");
    assert!(body["subscriber"]["id"].is_string());
}

#[tokio::test]
async fn subscribe_persists_the_normalized_subscriber() {
    let app = TestApp::spawn().await;
    let body = json!({"email": "  Jean.Dupont@Example.COM ", "firstName": " Jean ", "lastName": "Dupont"});

    let response = app.post_subscribe(&body).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = app.get("/api/subscribers").await.json().await.unwrap();
    let saved = &body["data"][0];
    assert_eq!(saved["email"], "jean.dupont@example.com");
    assert_eq!(saved["firstName"], "Jean");
    assert_eq!(saved["isActive"], true);
}

#[tokio::test]
async fn subscribe_accepts_the_french_field_names() {
    let app = TestApp::spawn().await;
    let body = json!({"email": "jean@example.com", "prenom": "Jean", "nom": "Dupont"});

    let response = app.post_subscribe(&body).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn subscribe_accepts_an_urlencoded_form_post() {
    let app = TestApp::spawn().await;
    let body = "email=Jean%40Example.com&prenom=Jean&nom=Dupont";

    let response = app.post_subscribe_form(body.into()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["subscriber"]["email"], "jean@example.com");
    assert_eq!(body["subscriber"]["firstName"], "Jean");
    assert_eq!(body["subscriber"]["lastName"], "Dupont");
}

#[tokio::test]
async fn an_incomplete_urlencoded_form_is_validated_like_json() {
    let app = TestApp::spawn().await;
    let test_cases = vec![
        ("prenom=Jean&nom=Dupont", json!(["Email is required"])),
        ("email=jean%40example.com&firstName=J&lastName=Dupont", json!(["First name must be at least 2 characters long"])),
        ("email=&prenom=&nom=", json!(["Email is required", "First name is required", "Last name is required"])),
    ];

    for (body, expected) in test_cases {
        let response = app.post_subscribe_form(body.into()).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the form was `{body}`"
        );

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["errors"], expected);
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_data_is_missing() {
    let app = TestApp::spawn().await;
    let test_cases = vec![
        (json!({"firstName": "Jean", "lastName": "Dupont"}), "missing the email"),
        (json!({"email": "jean@example.com", "lastName": "Dupont"}), "missing the first name"),
        (json!({"email": "jean@example.com", "firstName": "Jean"}), "missing the last name"),
        (json!({}), "missing every field"),
    ];

    for (body, description) in test_cases {
        let response = app.post_subscribe(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {description}"
        );
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_fields_are_present_but_invalid() {
    let app = TestApp::spawn().await;
    let test_cases = vec![
        (json!({"email": "", "firstName": "Jean", "lastName": "Dupont"}), "Email is required"),
        (json!({"email": "definitely-not-an-email", "firstName": "Jean", "lastName": "Dupont"}), "Email is not valid"),
        (json!({"email": "jean@example.com", "firstName": "   ", "lastName": "Dupont"}), "First name is required"),
        (json!({"email": "jean@example.com", "firstName": "J", "lastName": "Dupont"}), "First name must be at least 2 characters long"),
        (json!({"email": "jean@example.com", "firstName": "Jean", "lastName": "D"}), "Last name must be at least 2 characters long"),
    ];

    for (body, expected) in test_cases {
        let response = app.post_subscribe(&body).await;
        assert_eq!(response.status().as_u16(), 400);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"], json!([expected]));
    }
}

#[tokio::test]
async fn subscribe_reports_every_invalid_field_at_once() {
    let app = TestApp::spawn().await;
    let body = json!({"email": "invalid", "firstName": "A", "lastName": ""});

    let response = app.post_subscribe(&body).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["errors"],
        json!([
            "Email is not valid",
            "First name must be at least 2 characters long",
            "Last name is required",
        ])
    );
}

#[tokio::test]
async fn subscribing_twice_with_the_same_email_is_rejected() {
    let app = TestApp::spawn().await;
    app.create_subscriber("ursula@example.com").await;

    let body = json!({"email": "URSULA@example.com", "firstName": "Ursula", "lastName": "Le Guin"});
    let response = app.post_subscribe(&body).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"], json!(["This email is already subscribed"]));

    let stats: serde_json::Value = app.get("/api/stats").await.json().await.unwrap();
    assert_eq!(stats["data"]["totalSubscribers"], 1);
}

#[tokio::test]
async fn subscribe_returns_a_400_for_a_malformed_payload() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .post(format!("{}/api/subscribe", &app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"success": false, "errors": ["Invalid request payload"]})
    );
}

#[tokio::test]
async fn subscribe_hides_store_failures_behind_a_generic_message() {
    let app = TestApp::spawn_with_store(UnreachableStore).await;
    let body = json!({"email": "jean@example.com", "firstName": "Jean", "lastName": "Dupont"});

    let response = app.post_subscribe(&body).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["errors"],
        json!(["An error occurred during subscription. Please try again."])
    );
    assert!(!body.to_string().contains("10.0.0.1"));
}
