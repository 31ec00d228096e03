//! Webhook Integration Tests
//!
//! テスト内で生成したRSA鍵ペアによる署名検証とHTTP境界のテスト

use std::io::Write;
use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::sha2::Sha512;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use tower::ServiceExt;

use lexsync::adapter::config::{AutotaskConfig, Config, LexofficeConfig};
use lexsync::adapter::lexoffice::webhook::{WebhookVerifier, SIGNATURE_HEADER};
use lexsync::domain::error::SyncError;
use lexsync::driver::server::{build_router, AppState};
use lexsync::driver::SyncWorkflow;

/// 鍵生成は高価なのでテストバイナリ内で一度だけ行う
fn test_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("failed to generate RSA key")
    })
}

fn public_key_pem() -> String {
    test_key()
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap()
}

fn sign(body: &[u8]) -> String {
    let signing_key = SigningKey::<Sha512>::new(test_key().clone());
    BASE64.encode(signing_key.sign(body).to_bytes())
}

fn verifier() -> WebhookVerifier {
    WebhookVerifier::from_pem(&public_key_pem()).unwrap()
}

#[test]
fn test_valid_signature_verifies() {
    let body = br#"{"eventType":"contact.changed"}"#;
    verifier().verify(body, &sign(body)).unwrap();
}

#[test]
fn test_tampered_body_is_rejected() {
    let body = br#"{"eventType":"contact.changed"}"#;
    let signature = sign(body);

    let result = verifier().verify(br#"{"eventType":"contact.created"}"#, &signature);
    assert!(matches!(result, Err(SyncError::Authentication(_))));
}

#[test]
fn test_garbage_signature_is_rejected() {
    let result = verifier().verify(b"body", "not base64 at all!");
    assert!(matches!(result, Err(SyncError::Authentication(_))));
}

#[test]
fn test_wrong_length_signature_is_rejected() {
    // Valid base64, but far too short to be an RSA-2048 signature.
    let result = verifier().verify(b"body", &BASE64.encode(b"short"));
    assert!(matches!(result, Err(SyncError::Authentication(_))));
}

#[test]
fn test_public_key_loads_from_pem_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(public_key_pem().as_bytes()).unwrap();

    let verifier = WebhookVerifier::from_pem_file(file.path().to_str().unwrap()).unwrap();
    let body = b"payload";
    verifier.verify(body, &sign(body)).unwrap();
}

/// ネットワークに触れないHTTP境界テスト用の設定
fn test_config() -> Config {
    Config {
        lexoffice: LexofficeConfig {
            base_url: "https://api.lexoffice.example/v1".to_string(),
            api_key: "lex-key".to_string(),
            pubkey_path: None,
        },
        autotask: AutotaskConfig {
            base_url: "https://webservices.example/atservicesrest/v1.0".to_string(),
            username: "api-user@example.com".to_string(),
            secret: "at-secret".to_string(),
            integration_code: "INTCODE".to_string(),
            owner_resource_id: 29683468,
            default_phone: "+49-000".to_string(),
        },
    }
}

fn test_router() -> axum::Router {
    let workflow = SyncWorkflow::new(test_config()).unwrap();
    let state = Arc::new(AppState::new(workflow, verifier()));
    build_router(state)
}

fn webhook_request(body: &'static [u8], signature: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/webhook");
    if let Some(signature) = signature {
        builder = builder.header(SIGNATURE_HEADER, signature);
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_webhook_without_signature_is_unauthorized() {
    let body = br#"{"eventType":"contact.changed"}"#;
    let response = test_router()
        .oneshot(webhook_request(body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_webhook_with_wrong_signature_is_unauthorized() {
    let body = br#"{"eventType":"contact.changed"}"#;
    let signature = sign(b"a different body");
    let response = test_router()
        .oneshot(webhook_request(body, Some(&signature)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_webhook_with_signed_malformed_payload_is_bad_request() {
    // The signature is valid, so the failure is the payload itself.
    let body: &[u8] = b"not json";
    let signature = sign(body);
    let response = test_router()
        .oneshot(webhook_request(body, Some(&signature)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_ignores_unhandled_event_type() {
    let body: &[u8] = br#"{
        "organizationId": "org-1",
        "eventType": "invoice.created",
        "resourceId": "r-1",
        "eventDate": "2023-08-15T17:46:27.734+02:00"
    }"#;
    let signature = sign(body);
    let response = test_router()
        .oneshot(webhook_request(body, Some(&signature)))
        .await
        .unwrap();

    // Acknowledged without running a sync (nothing reaches the network).
    assert_eq!(response.status(), StatusCode::OK);
}
