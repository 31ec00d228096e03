//! # Workflow Orchestration
//!
//! ワークフローのオーケストレーション
//!
//! 具体的なクライアント実装をユースケースへ注入し、CLI向けの
//! レポート表示と終了コードを担当する。

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::adapter::autotask::AutotaskClient;
use crate::adapter::config::Config;
use crate::adapter::lexoffice::LexofficeClient;
use crate::application::use_cases::sync_all::SyncAllUseCase;
use crate::application::use_cases::sync_contact::{SyncContactUseCase, UpsertOutcome};
use crate::domain::entities::sync_report::SyncReport;
use crate::domain::error::SyncError;
use crate::domain::repositories::contact_source::ContactSource;
use crate::domain::services::mapping::MappingService;

/// 部分的な失敗を表す終了コード
pub const EXIT_PARTIAL_FAILURE: i32 = 2;

/// 同期ワークフロー
pub struct SyncWorkflow {
    config: Config,
    source: Arc<LexofficeClient>,
    contact_use_case: Arc<SyncContactUseCase<LexofficeClient, AutotaskClient>>,
    all_use_case: SyncAllUseCase<LexofficeClient, AutotaskClient>,
}

impl SyncWorkflow {
    /// 依存関係を組み立てて新しいワークフローを作成する
    pub fn new(config: Config) -> Result<Self> {
        let source = Arc::new(LexofficeClient::new(&config.lexoffice)?);
        let destination = Arc::new(AutotaskClient::new(&config.autotask)?);

        let contact_use_case = Arc::new(SyncContactUseCase::new(
            source.clone(),
            destination,
            config.mapping_defaults(),
        ));
        let all_use_case = SyncAllUseCase::new(source.clone(), contact_use_case.clone());

        Ok(Self {
            config,
            source,
            contact_use_case,
            all_use_case,
        })
    }

    /// 1件同期を実行する
    pub async fn run_contact(&self, contact_id: &str) -> Result<UpsertOutcome, SyncError> {
        self.contact_use_case.execute(contact_id).await
    }

    /// 全件同期を実行する
    pub async fn run_all(&self) -> Result<SyncReport, SyncError> {
        self.all_use_case.execute().await
    }

    /// `sync` サブコマンドを実行して終了コードを返す
    pub async fn run_sync(&self, contact_id: Option<&str>, dry_run: bool) -> Result<i32> {
        info!("Starting sync...");
        println!("✓ Using configuration:");
        println!("  Lexware Office: {}", self.config.lexoffice.base_url);
        println!(
            "  Autotask: {} (owner resource {})",
            self.config.autotask.base_url, self.config.autotask.owner_resource_id
        );

        if dry_run {
            println!("✓ Dry-run mode (not actually writing to Autotask)");
            let report = self.dry_run(contact_id).await?;
            print_report(&report);
            return Ok(exit_code(&report));
        }

        match contact_id {
            Some(id) => {
                match self.run_contact(id).await? {
                    UpsertOutcome::Created(company_id) => {
                        println!("✓ Created Autotask company {company_id} for contact {id}");
                    }
                    UpsertOutcome::Updated(company_id) => {
                        println!("✓ Updated Autotask company {company_id} for contact {id}");
                    }
                }
                Ok(0)
            }
            None => {
                let report = self.run_all().await?;
                print_report(&report);
                Ok(exit_code(&report))
            }
        }
    }

    /// 取得とマッピングのみ行い、書き込みはしない
    async fn dry_run(&self, contact_id: Option<&str>) -> Result<SyncReport, SyncError> {
        let contacts = match contact_id {
            Some(id) => vec![self.source.fetch_company(id).await?],
            None => self.source.fetch_companies().await?,
        };

        let defaults = self.config.mapping_defaults();
        let mut report = SyncReport::new();
        println!("  Would sync {} company contact(s):", contacts.len());

        for contact in &contacts {
            match MappingService::map_company(contact, &defaults) {
                Ok(company) => {
                    println!(
                        "    - {} -> {} (companyNumber: {})",
                        contact.id,
                        company.company_name,
                        company.company_number.as_deref().unwrap_or("-")
                    );
                    report.record_success();
                }
                Err(err) => report.record_failure(&contact.id, &err),
            }
        }

        Ok(report)
    }
}

/// 同期レポートを表示する
fn print_report(report: &SyncReport) {
    println!(
        "✓ Sync complete: {}/{} companies synchronized",
        report.succeeded, report.attempted
    );
    if !report.failed.is_empty() {
        println!("⚠ {} record(s) failed:", report.failed_count());
        for failure in &report.failed {
            println!("    - {}: {}", failure.contact_id, failure.error);
        }
    }
}

/// レポートから終了コードを導出する
fn exit_code(report: &SyncReport) -> i32 {
    if report.is_success() {
        0
    } else {
        EXIT_PARTIAL_FAILURE
    }
}
