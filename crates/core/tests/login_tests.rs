//! Login flow against a stub endpoint

mod common;

use std::sync::Arc;

use common::{gate_for, setup_mock_server};
use dashboard_core::session::{
    AuthResponse, Authenticator, Credentials, HttpAuthenticator, LoginOutcome, SessionGate,
    SessionState,
};
use dashboard_core::storage::{MemorySlotStorage, SlotStorage, TOKEN_SLOT};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn creds() -> Credentials {
    Credentials::new("rahul", "rahul@2021")
}

#[tokio::test]
async fn test_valid_credentials_store_token() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "rahul", "password": "rahul@2021"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt_token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let (gate, storage) = gate_for(&server);
    let outcome = gate.login(&creds()).await.unwrap();

    assert_eq!(outcome, LoginOutcome::LoggedIn);
    assert_eq!(storage.get(TOKEN_SLOT).await.unwrap(), Some("abc".to_string()));
    assert_eq!(gate.state().await.unwrap(), SessionState::LoggedIn);
}

#[tokio::test]
async fn test_invalid_credentials_surface_server_message() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error_msg": "bad creds"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (gate, storage) = gate_for(&server);
    let outcome = gate.login(&creds()).await.unwrap();

    assert_eq!(
        outcome,
        LoginOutcome::Rejected {
            message: "bad creds".to_string()
        }
    );
    assert_eq!(storage.get(TOKEN_SLOT).await.unwrap(), None);
    assert_eq!(gate.state().await.unwrap(), SessionState::LoggedOut);
}

#[tokio::test]
async fn test_error_without_message_reports_status() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let auth = HttpAuthenticator::new(server.uri());
    let response = auth.authenticate(&creds()).await.unwrap();

    match response {
        AuthResponse::Denied { message } => assert!(message.contains("500")),
        other => panic!("Expected Denied, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_success_without_token_is_denied() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let (gate, storage) = gate_for(&server);
    let outcome = gate.login(&creds()).await.unwrap();

    assert!(matches!(outcome, LoginOutcome::Rejected { .. }));
    assert_eq!(storage.get(TOKEN_SLOT).await.unwrap(), None);
}

#[tokio::test]
async fn test_blank_token_is_denied() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt_token": "   "})))
        .expect(1)
        .mount(&server)
        .await;

    let (gate, storage) = gate_for(&server);
    let outcome = gate.login(&creds()).await.unwrap();

    assert_eq!(
        outcome,
        LoginOutcome::Rejected {
            message: "Login response did not include a token".to_string()
        }
    );
    assert_eq!(storage.get(TOKEN_SLOT).await.unwrap(), None);
    assert_eq!(gate.state().await.unwrap(), SessionState::LoggedOut);
}

#[tokio::test]
async fn test_logout_never_contacts_endpoint() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt_token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let (gate, storage) = gate_for(&server);
    gate.login(&creds()).await.unwrap();
    gate.logout().await.unwrap();

    assert_eq!(storage.get(TOKEN_SLOT).await.unwrap(), None);
    assert_eq!(gate.state().await.unwrap(), SessionState::LoggedOut);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_rejection() {
    let storage = Arc::new(MemorySlotStorage::new());
    let gate = SessionGate::new(
        storage.clone(),
        Arc::new(HttpAuthenticator::new("http://127.0.0.1:1")),
    );

    let outcome = gate.login(&creds()).await.unwrap();

    assert!(matches!(outcome, LoginOutcome::Rejected { .. }));
    assert_eq!(storage.get(TOKEN_SLOT).await.unwrap(), None);
}
