//! # SyncReport Value Object
//!
//! 1回の同期実行の結果を集約するバリューオブジェクト
//!
//! レコード単位の失敗は実行を中断せず、ここに蓄積される。

use chrono::{DateTime, Utc};

use crate::domain::error::SyncError;

/// レコード単位の失敗
#[derive(Debug, Clone)]
pub struct RecordFailure {
    /// 失敗したソースコンタクトのID
    pub contact_id: String,
    /// エラーの文字列表現
    pub error: String,
}

/// 同期実行レポート
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// 実行ID（ログ相関用）
    pub run_id: String,
    /// 実行開始時刻
    pub started_at: DateTime<Utc>,
    /// 処理を試みたレコード数
    pub attempted: usize,
    /// 成功したレコード数
    pub succeeded: usize,
    /// 失敗したレコード
    pub failed: Vec<RecordFailure>,
}

impl SyncReport {
    /// 新しい空のレポートを作成する
    pub fn new() -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            attempted: 0,
            succeeded: 0,
            failed: Vec::new(),
        }
    }

    /// 成功を記録する
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    /// 失敗を記録する
    pub fn record_failure(&mut self, contact_id: impl Into<String>, error: &SyncError) {
        self.attempted += 1;
        self.failed.push(RecordFailure {
            contact_id: contact_id.into(),
            error: error.to_string(),
        });
    }

    /// 失敗したレコード数
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// 全レコードが成功したかどうか
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Default for SyncReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = SyncReport::new();
        assert_eq!(report.attempted, 0);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed_count(), 0);
        assert!(report.is_success());
        assert!(!report.run_id.is_empty());
    }

    #[test]
    fn test_record_success() {
        let mut report = SyncReport::new();
        report.record_success();
        report.record_success();

        assert_eq!(report.attempted, 2);
        assert_eq!(report.succeeded, 2);
        assert!(report.is_success());
    }

    #[test]
    fn test_record_failure_keeps_counting() {
        let mut report = SyncReport::new();
        report.record_success();
        report.record_failure("c-2", &SyncError::Validation("no name".to_string()));

        assert_eq!(report.attempted, 2);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.is_success());
        assert_eq!(report.failed[0].contact_id, "c-2");
        assert!(report.failed[0].error.contains("no name"));
    }
}
