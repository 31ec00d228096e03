//! # AtCompany Entity
//!
//! Autotask の会社エンティティ（書き込み対象の形）
//!
//! マッピングの出力であり、宛先スキーマの必須フィールドを
//! 常に満たす（設定既定値でフォールバック済み）。

use std::fmt;

use serde::{Deserialize, Serialize};

/// Autotask 会社ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtCompanyId(pub i64);

impl fmt::Display for AtCompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 宛先でのマッチングキー
///
/// 冪等な upsert 判定のための決定的なキー。
/// 顧客番号があればそれを、なければ会社名の完全一致を使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKey {
    CompanyNumber(String),
    CompanyName(String),
}

/// Autotask の会社
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtCompany {
    pub company_name: String,
    /// Lexware Office の顧客番号（外部識別子）
    pub company_number: Option<String>,
    /// 設定から供給される担当リソースID（ソース由来ではない）
    pub owner_resource_id: i64,
    /// companyType（1 = 顧客）
    pub company_type: i32,
    pub phone: String,
    pub fax: Option<String>,
    pub tax_id: Option<String>,
    pub address1: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    /// ISO国コード。宛先クライアントが書き込み時に国IDへ解決する
    pub country_code: Option<String>,
    pub billing_address1: Option<String>,
    pub bill_to_city: Option<String>,
    pub bill_to_zip_code: Option<String>,
    pub bill_to_country_code: Option<String>,
    /// 会社作成時に併せて登録される担当者
    pub contacts: Vec<AtContact>,
}

impl AtCompany {
    /// 決定的なマッチングキーを返す
    pub fn match_key(&self) -> MatchKey {
        match &self.company_number {
            Some(number) if !number.is_empty() => MatchKey::CompanyNumber(number.clone()),
            _ => MatchKey::CompanyName(self.company_name.clone()),
        }
    }
}

/// Autotask の担当者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtContact {
    pub first_name: String,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub primary_contact: bool,
}
