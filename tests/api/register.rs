//! tests/api/register.rs

use crate::helpers::{setup, setup_with_repository};
use async_trait::async_trait;
use maillist::domain::User;
use maillist::repository::UserRepository;
use std::sync::Arc;

#[tokio::test]
async fn register_returns_a_201_for_valid_data() {
    // Arrange
    let test = setup().await;

    // Act
    let body = serde_json::json!({ "name": "Any name", "email": "any@mail.com" });
    let response = test.post_json("/register", &body).await;

    // Assert
    assert_eq!(201, response.status().as_u16());
    let returned: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, returned);
}

#[tokio::test]
async fn register_persists_the_new_user() {
    // Arrange
    let test = setup().await;

    // Act
    let body = serde_json::json!({ "name": "Any name", "email": "any@mail.com" });
    let _ = test.post_json("/register", &body).await;

    // Assert
    let saved = test
        .repository
        .find_user_by_email("any@mail.com")
        .await
        .expect("Failed to query the repository")
        .expect("The user was not persisted");

    assert_eq!("Any name", saved.name.as_ref());
    assert_eq!("any@mail.com", saved.email.as_ref());
}

#[tokio::test]
async fn register_returns_a_400_when_the_name_is_invalid() {
    // Arrange
    let test = setup().await;

    // Act
    let body = serde_json::json!({ "name": "A", "email": "any@mail.com" });
    let response = test.post_json("/register", &body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let returned: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(returned["error"]
        .as_str()
        .expect("The error body carries no message")
        .starts_with("Invalid name"));

    let users = test.repository.find_all_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn register_returns_a_400_when_the_email_is_invalid() {
    // Arrange
    let test = setup().await;

    // Act
    let body = serde_json::json!({ "name": "Any name", "email": "invalid_mail.com" });
    let response = test.post_json("/register", &body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let returned: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(returned["error"]
        .as_str()
        .expect("The error body carries no message")
        .starts_with("Invalid email"));

    let saved = test
        .repository
        .find_user_by_email("invalid_mail.com")
        .await
        .unwrap();
    assert!(saved.is_none());
}

#[tokio::test]
async fn register_returns_a_400_when_parameters_are_missing() {
    // Arrange
    let test = setup().await;
    let test_cases = vec![
        (
            serde_json::json!({ "email": "any@mail.com" }),
            "Missing parameter from request: name",
        ),
        (
            serde_json::json!({ "name": "Any name" }),
            "Missing parameter from request: email",
        ),
        (
            serde_json::json!({}),
            "Missing parameter from request: name email",
        ),
    ];

    for (body, expected_message) in test_cases {
        // Act
        let response = test.post_json("/register", &body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            body
        );
        let returned: serde_json::Value =
            response.json().await.expect("Failed to parse response");
        assert_eq!(returned["error"], expected_message);
    }
}

struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn add(&self, _user: User) -> Result<(), anyhow::Error> {
        Err(anyhow::anyhow!("the store is unavailable"))
    }

    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, anyhow::Error> {
        Err(anyhow::anyhow!("the store is unavailable"))
    }

    async fn find_all_users(&self) -> Result<Vec<User>, anyhow::Error> {
        Err(anyhow::anyhow!("the store is unavailable"))
    }
}

#[tokio::test]
async fn register_returns_a_500_when_the_store_fails() {
    // Arrange
    let address = setup_with_repository(Arc::new(FailingUserRepository)).await;

    // Act
    let body = serde_json::json!({ "name": "Any name", "email": "any@mail.com" });
    let response = reqwest::Client::new()
        .post(format!("{}/register", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(500, response.status().as_u16());
    let returned: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(returned["error"].is_string());
}
