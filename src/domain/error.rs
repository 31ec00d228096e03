//! # Sync Error Taxonomy
//!
//! 同期処理のエラー分類
//!
//! レコード単位で隔離できるエラーと、実行全体を中断すべき
//! エラーを区別する。コア自身はリトライを行わない。

use thiserror::Error;

/// 同期エラー
#[derive(Debug, Error)]
pub enum SyncError {
    /// 認証情報が拒否された（致命的、リトライ不可）
    #[error("authentication rejected: {0}")]
    Authentication(String),

    /// レコードが存在しない（スキップしてログ出力）
    #[error("record not found: {0}")]
    NotFound(String),

    /// マッピング入力が不正（スキップしてレポート）
    #[error("validation failed: {0}")]
    Validation(String),

    /// 宛先のマッチングが曖昧（スキップしてレポート）
    #[error("ambiguous destination match: {0}")]
    Conflict(String),

    /// ネットワーク/5xx系の一時的な障害（リトライは呼び出し側のポリシー）
    #[error("transient failure: {0}")]
    Transient(String),

    /// 予期しないエラー（実行を中断する）
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl SyncError {
    /// 実行全体を中断すべきエラーかどうか
    ///
    /// 認証エラーは以降のレコードでも失敗し続けるため、
    /// 予期しないエラーと同様に全件同期を中断する。
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SyncError::Authentication(_) | SyncError::Unexpected(_)
        )
    }
}
