//! # Sync Contact Use Case
//!
//! 1件のコンタクトを取得・マッピングし、宛先へ upsert する

use std::sync::Arc;

use log::info;

use crate::domain::entities::at_company::AtCompanyId;
use crate::domain::entities::lex_contact::LexContact;
use crate::domain::error::SyncError;
use crate::domain::repositories::company_destination::CompanyDestination;
use crate::domain::repositories::contact_source::ContactSource;
use crate::domain::services::mapping::{MappingDefaults, MappingService};

/// Upsert の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// 宛先に新規作成された
    Created(AtCompanyId),
    /// 既存の会社が更新された
    Updated(AtCompanyId),
}

impl UpsertOutcome {
    /// 対象となった宛先の会社ID
    pub fn company_id(&self) -> AtCompanyId {
        match self {
            UpsertOutcome::Created(id) | UpsertOutcome::Updated(id) => *id,
        }
    }
}

/// 1件同期ユースケース
pub struct SyncContactUseCase<S: ContactSource, D: CompanyDestination> {
    source: Arc<S>,
    destination: Arc<D>,
    defaults: MappingDefaults,
}

impl<S: ContactSource, D: CompanyDestination> SyncContactUseCase<S, D> {
    /// 新しいユースケースを作成する
    pub fn new(source: Arc<S>, destination: Arc<D>, defaults: MappingDefaults) -> Self {
        Self {
            source,
            destination,
            defaults,
        }
    }

    /// コンタクトIDを指定して同期する
    pub async fn execute(&self, contact_id: &str) -> Result<UpsertOutcome, SyncError> {
        let contact = self.source.fetch_company(contact_id).await?;
        self.sync_fetched(&contact).await
    }

    /// 取得済みのコンタクトを同期する（全件同期から再利用される）
    pub async fn sync_fetched(&self, contact: &LexContact) -> Result<UpsertOutcome, SyncError> {
        let company = MappingService::map_company(contact, &self.defaults)?;

        // Explicit two-state upsert decision. The deterministic match
        // key keeps repeated runs from creating duplicates.
        match self.destination.find_company(&company).await? {
            Some(id) => {
                self.destination.update_company(id, &company).await?;
                info!("Updated Autotask company {} for contact {}", id, contact.id);
                Ok(UpsertOutcome::Updated(id))
            }
            None => {
                let id = self.destination.create_company(&company).await?;
                info!("Created Autotask company {} for contact {}", id, contact.id);
                Ok(UpsertOutcome::Created(id))
            }
        }
    }
}
