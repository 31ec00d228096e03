//! # Contact Source Trait
//!
//! ソースプラットフォーム（会計システム）からの会社レコード取得を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::lex_contact::LexContact;
use crate::domain::error::SyncError;

/// コンタクトソース
///
/// 会社コンタクトの読み取り専用ポート。コア自身はリトライしない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// 会社コンタクトを1件取得する
    ///
    /// # Errors
    ///
    /// 認証拒否で `Authentication`、ID不明または会社でない
    /// コンタクトで `NotFound`、ネットワーク/5xx で `Transient`
    async fn fetch_company(&self, id: &str) -> Result<LexContact, SyncError>;

    /// 全ての会社コンタクトを取得する
    ///
    /// 個人コンタクトはスキップされる。
    async fn fetch_companies(&self) -> Result<Vec<LexContact>, SyncError>;
}
