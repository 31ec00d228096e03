//! # Webhook Server
//!
//! Lexware Office からの webhook を受け取り、対象コンタクトを同期する
//!
//! 署名検証が唯一のセキュリティ境界であり、検証を通るまで
//! ペイロードの解析も同期も行わない。

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use log::{error, info, warn};
use tokio::sync::Mutex;

use crate::adapter::config::Config;
use crate::adapter::lexoffice::webhook::{WebhookEvent, WebhookVerifier, SIGNATURE_HEADER};
use crate::domain::error::SyncError;

use super::workflow::SyncWorkflow;

/// サーバー共有状態
pub struct AppState {
    workflow: SyncWorkflow,
    verifier: WebhookVerifier,
    /// 同期実行を直列化するロック
    ///
    /// 宛先の create/update 判定はトランザクショナルでないため、
    /// webhook の同時配信をここで直列化する
    sync_lock: Mutex<()>,
}

impl AppState {
    /// 新しいサーバー状態を作成する
    pub fn new(workflow: SyncWorkflow, verifier: WebhookVerifier) -> Self {
        Self {
            workflow,
            verifier,
            sync_lock: Mutex::new(()),
        }
    }
}

/// Webhookサーバーを起動する
///
/// # Errors
///
/// 公開鍵が未設定・読めない、またはアドレスにバインドできない
/// 場合にエラーを返す
pub async fn serve(config: Config, host: &str, port: u16) -> Result<()> {
    let pubkey_path = config
        .lexoffice
        .pubkey_path
        .clone()
        .context("LEXOFFICE_PUBKEY_PATH is required to run the webhook server")?;
    let verifier = WebhookVerifier::from_pem_file(&pubkey_path)?;
    let workflow = SyncWorkflow::new(config)?;

    let state = Arc::new(AppState::new(workflow, verifier));
    let router = build_router(state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("invalid listen address")?;
    info!("Webhook server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

/// ルーターを組み立てる
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(handle_webhook))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    // Signature check comes first: nothing below runs until the
    // payload is authenticated against the configured public key.
    let Some(signature) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        warn!("Webhook rejected: missing {SIGNATURE_HEADER} header");
        return (StatusCode::UNAUTHORIZED, "missing signature".to_string());
    };
    if let Err(err) = state.verifier.verify(&body, signature) {
        warn!("Webhook rejected: {err}");
        return (StatusCode::UNAUTHORIZED, "invalid signature".to_string());
    }

    let event = match WebhookEvent::from_slice(&body) {
        Ok(event) => event,
        Err(err) => {
            warn!("Webhook payload rejected: {err}");
            return (StatusCode::BAD_REQUEST, "malformed payload".to_string());
        }
    };

    if !event.triggers_sync() {
        info!("Ignoring webhook event type {}", event.event_type);
        return (
            StatusCode::OK,
            "webhook received, but not processed".to_string(),
        );
    }

    info!(
        "Webhook received for contact {} ({})",
        event.resource_id, event.event_type
    );

    // Concurrent deliveries could race the create-vs-update decision
    // on the destination, so sync runs are serialized.
    let _guard = state.sync_lock.lock().await;
    match state.workflow.run_contact(&event.resource_id).await {
        Ok(outcome) => {
            info!(
                "Contact {} synchronized ({:?})",
                event.resource_id, outcome
            );
            (StatusCode::OK, "webhook received".to_string())
        }
        Err(SyncError::NotFound(msg)) => {
            warn!("Webhook contact not found: {msg}");
            (
                StatusCode::OK,
                "webhook received, resource not found".to_string(),
            )
        }
        Err(err) => {
            error!("Webhook sync failed: {err}");
            (StatusCode::BAD_GATEWAY, "sync failed".to_string())
        }
    }
}
