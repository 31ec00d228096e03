//! # Sync All Use Case
//!
//! 全件同期とレコード単位の失敗集約
//!
//! 1件の失敗で実行全体を中断せず、レポートに蓄積して継続する。
//! 認証エラーと予期しないエラーのみ実行を中断する。

use std::sync::Arc;

use log::{debug, info, warn};

use crate::domain::entities::sync_report::SyncReport;
use crate::domain::error::SyncError;
use crate::domain::repositories::company_destination::CompanyDestination;
use crate::domain::repositories::contact_source::ContactSource;

use super::sync_contact::SyncContactUseCase;

/// 全件同期ユースケース
pub struct SyncAllUseCase<S: ContactSource, D: CompanyDestination> {
    source: Arc<S>,
    contact_use_case: Arc<SyncContactUseCase<S, D>>,
}

impl<S: ContactSource, D: CompanyDestination> SyncAllUseCase<S, D> {
    /// 新しいユースケースを作成する
    pub fn new(source: Arc<S>, contact_use_case: Arc<SyncContactUseCase<S, D>>) -> Self {
        Self {
            source,
            contact_use_case,
        }
    }

    /// 全ての会社コンタクトを順次同期する
    ///
    /// # Errors
    ///
    /// 一覧取得の失敗、および致命的なエラー（`SyncError::is_fatal`）で
    /// エラーを返す。レコード単位の失敗はレポートに含めて `Ok` を返す。
    pub async fn execute(&self) -> Result<SyncReport, SyncError> {
        let mut report = SyncReport::new();
        info!("Starting sync run {}", report.run_id);

        let contacts = self.source.fetch_companies().await?;
        info!("Fetched {} company contacts from source", contacts.len());

        for contact in &contacts {
            match self.contact_use_case.sync_fetched(contact).await {
                Ok(outcome) => {
                    debug!("Contact {} synchronized: {:?}", contact.id, outcome);
                    report.record_success();
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!("Skipping contact {}: {}", contact.id, err);
                    report.record_failure(&contact.id, &err);
                }
            }
        }

        info!(
            "Sync run {} finished: {}/{} succeeded, {} failed",
            report.run_id,
            report.succeeded,
            report.attempted,
            report.failed_count()
        );
        Ok(report)
    }
}
