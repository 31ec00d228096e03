//! # LexContact Entity
//!
//! Lexware Office の会社コンタクトを表すドメインエンティティ
//!
//! 1回の同期サイクルにおけるイミュータブルなスナップショット。
//! ワイヤ表現からの変換は Adapter層（`adapter::lexoffice::models`）が担当する。

use serde::{Deserialize, Serialize};

/// 住所（請求先・配送先共通）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
}

/// 担当者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub primary: bool,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
}

/// Lexware Office の会社コンタクト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexContact {
    pub id: String,
    pub organization_id: Option<String>,
    pub version: i64,
    /// 顧客ロールの顧客番号（宛先でのマッチングキーになる）
    pub customer_number: Option<String>,
    pub name: String,
    pub tax_number: Option<String>,
    pub vat_id: Option<String>,
    pub allow_tax_free_invoices: Option<bool>,
    pub contact_persons: Vec<ContactPerson>,
    pub email_addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub fax_numbers: Vec<String>,
    pub note: Option<String>,
    pub archived: bool,
    pub billing_addresses: Vec<Address>,
    pub shipping_addresses: Vec<Address>,
}

impl LexContact {
    /// 業務用電話番号の先頭を返す
    pub fn primary_phone(&self) -> Option<&str> {
        self.phone_numbers.first().map(String::as_str)
    }

    /// FAX番号の先頭を返す
    pub fn primary_fax(&self) -> Option<&str> {
        self.fax_numbers.first().map(String::as_str)
    }

    /// 配送先住所の先頭を返す（Autotask の実住所に対応）
    pub fn primary_shipping_address(&self) -> Option<&Address> {
        self.shipping_addresses.first()
    }

    /// 請求先住所の先頭を返す
    pub fn primary_billing_address(&self) -> Option<&Address> {
        self.billing_addresses.first()
    }
}
