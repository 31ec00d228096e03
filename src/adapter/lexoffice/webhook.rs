//! # Webhook Verification
//!
//! Lexware Office webhook のペイロード解析と署名検証
//!
//! 署名は生のリクエストボディに対する RSA PKCS#1 v1.5 + SHA-512 で、
//! `X-Lxo-Signature` ヘッダーに Base64 で格納される。検証は同期
//! ロジックに入る前のセキュリティ境界として必ず通る。

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::sha2::Sha512;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use serde::Deserialize;

use crate::domain::error::SyncError;

/// 署名を運ぶHTTPヘッダー
pub const SIGNATURE_HEADER: &str = "X-Lxo-Signature";

/// 同期をトリガーするイベントタイプ
const EVENT_CONTACT_CREATED: &str = "contact.created";
const EVENT_CONTACT_CHANGED: &str = "contact.changed";

/// Webhook イベントペイロード
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    pub organization_id: String,
    pub event_type: String,
    pub resource_id: String,
    pub event_date: DateTime<Utc>,
}

impl WebhookEvent {
    /// 検証済みボディからイベントを読み取る
    ///
    /// # Errors
    ///
    /// JSONとして不正な場合に `SyncError::Validation` を返す
    pub fn from_slice(body: &[u8]) -> Result<Self, SyncError> {
        serde_json::from_slice(body)
            .map_err(|e| SyncError::Validation(format!("malformed webhook payload: {e}")))
    }

    /// 同期をトリガーするイベントタイプかどうか
    pub fn triggers_sync(&self) -> bool {
        matches!(
            self.event_type.as_str(),
            EVENT_CONTACT_CREATED | EVENT_CONTACT_CHANGED
        )
    }
}

/// Webhook 署名検証器
pub struct WebhookVerifier {
    key: VerifyingKey<Sha512>,
}

impl WebhookVerifier {
    /// PEMファイルから公開鍵を読み込む
    pub fn from_pem_file(path: &str) -> Result<Self> {
        let pem = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read webhook public key {path}"))?;
        Self::from_pem(&pem)
    }

    /// PEM文字列（SPKI）から公開鍵を読み込む
    pub fn from_pem(pem: &str) -> Result<Self> {
        let key = RsaPublicKey::from_public_key_pem(pem)
            .context("invalid webhook public key PEM")?;
        Ok(Self {
            key: VerifyingKey::<Sha512>::new(key),
        })
    }

    /// 生のボディに対する Base64 署名を検証する
    ///
    /// # Errors
    ///
    /// 署名が不正・不一致の場合に `SyncError::Authentication` を返す
    pub fn verify(&self, body: &[u8], signature_b64: &str) -> Result<(), SyncError> {
        let raw = BASE64.decode(signature_b64.trim()).map_err(|e| {
            SyncError::Authentication(format!("webhook signature is not valid base64: {e}"))
        })?;
        let signature = Signature::try_from(raw.as_slice()).map_err(|e| {
            SyncError::Authentication(format!("webhook signature is malformed: {e}"))
        })?;
        self.key
            .verify(body, &signature)
            .map_err(|_| SyncError::Authentication("webhook signature mismatch".to_string()))
    }
}
