//! # Company Destination Trait
//!
//! 宛先プラットフォーム（PSA）への会社レコード書き込みを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::at_company::{AtCompany, AtCompanyId};
use crate::domain::error::SyncError;

/// 会社デスティネーション
///
/// create / update の判定材料となる検索と、書き込み操作を提供する。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompanyDestination: Send + Sync {
    /// マッチングポリシーに従って既存の会社を検索する
    ///
    /// `AtCompany::match_key`（顧客番号、なければ会社名の完全一致）で
    /// 検索する。0件で `None`、1件でそのID。
    ///
    /// # Errors
    ///
    /// 複数件一致した場合は `Conflict`
    async fn find_company(&self, company: &AtCompany) -> Result<Option<AtCompanyId>, SyncError>;

    /// 会社を新規作成し、担当者も併せて登録する
    async fn create_company(&self, company: &AtCompany) -> Result<AtCompanyId, SyncError>;

    /// 既存の会社を更新する
    ///
    /// 担当者は作成時のみ登録され、更新では変更しない。
    async fn update_company(&self, id: AtCompanyId, company: &AtCompany)
        -> Result<(), SyncError>;
}
