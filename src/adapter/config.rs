//! # Configuration
//!
//! 環境変数からプロセス起動時に一度だけ読み込む設定
//!
//! プロセスのライフタイムの間イミュータブルで、再読み込みは行わない。
//! アンビエントな参照は避け、構築した `Config` を各コンポーネントへ
//! 明示的に渡す。

use anyhow::{Context, Result};
use std::env;

use crate::domain::services::mapping::MappingDefaults;

/// Lexware Office API の設定
#[derive(Debug, Clone)]
pub struct LexofficeConfig {
    pub base_url: String,
    pub api_key: String,
    /// Webhook署名検証用の公開鍵（PEM）のパス
    ///
    /// `serve` でのみ必須
    pub pubkey_path: Option<String>,
}

/// Autotask API の設定
#[derive(Debug, Clone)]
pub struct AutotaskConfig {
    pub base_url: String,
    pub username: String,
    pub secret: String,
    pub integration_code: String,
    /// 作成・更新されるすべての会社に設定される担当リソースID
    pub owner_resource_id: i64,
    /// ソースに電話番号がない場合の既定電話番号
    pub default_phone: String,
}

/// アプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct Config {
    pub lexoffice: LexofficeConfig,
    pub autotask: AutotaskConfig,
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// # Errors
    ///
    /// 必須の環境変数が欠けている、または不正な場合にエラーを返す
    /// （起動時に致命的）
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            lexoffice: LexofficeConfig {
                base_url: required("LEXOFFICE_BASE_URL")?,
                api_key: required("LEXOFFICE_API_KEY")?,
                pubkey_path: env::var("LEXOFFICE_PUBKEY_PATH").ok(),
            },
            autotask: AutotaskConfig {
                base_url: required("AUTOTASK_BASE_URL")?,
                username: required("AUTOTASK_API_USERNAME")?,
                secret: required("AUTOTASK_API_SECRET")?,
                integration_code: required("AUTOTASK_API_INTEGRATION_CODE")?,
                owner_resource_id: required("AUTOTASK_OWNER_RESOURCE_ID")?
                    .parse()
                    .context("AUTOTASK_OWNER_RESOURCE_ID must be an integer")?,
                default_phone: required("AUTOTASK_DEFAULT_PHONE")?,
            },
        })
    }

    /// マッピング既定値を導出する
    pub fn mapping_defaults(&self) -> MappingDefaults {
        MappingDefaults {
            owner_resource_id: self.autotask.owner_resource_id,
            default_phone: self.autotask.default_phone.clone(),
        }
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("missing required environment variable {name}"))
}
