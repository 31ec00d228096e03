//! # Autotask Wire Models
//!
//! Companies / Contacts / Countries エンドポイントのリクエスト・
//! レスポンス表現
//!
//! 未設定のフィールドはシリアライズしない（宛先APIは欠落フィールドを
//! 「変更なし」として扱う）。

use serde::{Deserialize, Serialize};

use crate::domain::entities::at_company::{AtCompany, AtContact};

/// Companies エンティティの書き込みペイロード
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    /// 更新時のみ設定される宛先ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    pub company_type: i32,
    #[serde(rename = "ownerResourceID")]
    pub owner_resource_id: i64,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(rename = "taxID", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "countryID", skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to_zip_code: Option<String>,
    #[serde(rename = "billToCountryID", skip_serializing_if = "Option::is_none")]
    pub bill_to_country_id: Option<i64>,
}

impl CompanyPayload {
    /// ドメインエンティティからペイロードを構築する
    ///
    /// 国コードは呼び出し側で解決済みの国IDを渡す
    pub fn from_company(
        company: &AtCompany,
        id: Option<i64>,
        country_id: Option<i64>,
        bill_to_country_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            company_name: company.company_name.clone(),
            company_number: company.company_number.clone(),
            company_type: company.company_type,
            owner_resource_id: company.owner_resource_id,
            phone: company.phone.clone(),
            fax: company.fax.clone(),
            tax_id: company.tax_id.clone(),
            address1: company.address1.clone(),
            city: company.city.clone(),
            postal_code: company.postal_code.clone(),
            country_id,
            billing_address1: company.billing_address1.clone(),
            bill_to_city: company.bill_to_city.clone(),
            bill_to_zip_code: company.bill_to_zip_code.clone(),
            bill_to_country_id,
        }
    }
}

/// Contacts エンティティの書き込みペイロード
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: i32,
    pub primary_contact: bool,
}

impl From<&AtContact> for ContactPayload {
    fn from(contact: &AtContact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email_address: contact.email_address.clone(),
            phone: contact.phone.clone(),
            is_active: 1,
            primary_contact: contact.primary_contact,
        }
    }
}

/// 書き込み系レスポンス
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemIdResponse {
    pub item_id: i64,
}

/// query 系レスポンス
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct QueryResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

/// Companies/query のアイテム（IDのみ使用）
#[derive(Debug, Deserialize)]
pub struct CompanyItem {
    pub id: i64,
}

/// Countries/query のアイテム
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryItem {
    pub id: i64,
    pub country_code: Option<String>,
}

/// query エンドポイント用の等値フィルタ（JSON文字列）を組み立てる
pub fn eq_filter(field: &str, value: &str) -> String {
    serde_json::json!({
        "filter": [{ "field": field, "op": "eq", "value": value }]
    })
    .to_string()
}
