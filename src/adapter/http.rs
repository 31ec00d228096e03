//! # HTTP Error Classification
//!
//! レスポンスステータスとトランスポートエラーの `SyncError` への分類
//!
//! 両クライアント共通。分類のみを行い、リトライはしない。

use reqwest::StatusCode;

use crate::domain::error::SyncError;

/// レスポンスステータスを `SyncError` に分類する
pub(crate) fn classify_status(status: StatusCode, what: &str) -> SyncError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SyncError::Authentication(format!("{what}: HTTP {status}"))
        }
        StatusCode::NOT_FOUND => SyncError::NotFound(what.to_string()),
        StatusCode::CONFLICT => SyncError::Conflict(format!("{what}: HTTP {status}")),
        StatusCode::TOO_MANY_REQUESTS => SyncError::Transient(format!("{what}: HTTP {status}")),
        status if status.is_server_error() => {
            SyncError::Transient(format!("{what}: HTTP {status}"))
        }
        status => SyncError::Unexpected(anyhow::anyhow!("{what}: unexpected HTTP {status}")),
    }
}

/// トランスポートレベルのエラー（接続・タイムアウト等）を分類する
pub(crate) fn classify_transport(err: reqwest::Error, what: &str) -> SyncError {
    if err.is_builder() {
        SyncError::Unexpected(anyhow::Error::new(err).context(what.to_string()))
    } else {
        // Connection resets, refused connections and timeouts are all
        // retryable at the caller's discretion.
        SyncError::Transient(format!("{what}: {err}"))
    }
}

/// レスポンスボディのデコード失敗を分類する
pub(crate) fn classify_decode(err: reqwest::Error, what: &str) -> SyncError {
    SyncError::Unexpected(anyhow::Error::new(err).context(format!("{what}: invalid response body")))
}
