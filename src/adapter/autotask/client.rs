//! # Autotask Client
//!
//! Companies / Contacts エンドポイントへの書き込みクライアント
//!
//! ヘッダー（`ApiIntegrationCode` / `UserName` / `Secret`）で認証する。
//! create / update の判定材料となる検索は `AtCompany::match_key` の
//! 決定的なキーで行い、複数件一致は `Conflict` として呼び出し側へ返す。

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapter::config::AutotaskConfig;
use crate::adapter::http::{classify_decode, classify_status, classify_transport};
use crate::domain::entities::at_company::{AtCompany, AtCompanyId, MatchKey};
use crate::domain::error::SyncError;
use crate::domain::repositories::company_destination::CompanyDestination;

use super::models::{
    eq_filter, CompanyItem, CompanyPayload, ContactPayload, CountryItem, ItemIdResponse,
    QueryResponse,
};

/// HTTP呼び出しごとの明示的なタイムアウト
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Autotask REST API クライアント
pub struct AutotaskClient {
    http: reqwest::Client,
    base_url: String,
}

impl AutotaskClient {
    /// 新しいクライアントを作成する
    ///
    /// # Errors
    ///
    /// 認証情報がヘッダー値として不正、またはHTTPクライアントの
    /// 構築に失敗した場合にエラーを返す
    pub fn new(config: &AutotaskConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "ApiIntegrationCode",
            HeaderValue::from_str(&config.integration_code)
                .context("AUTOTASK_API_INTEGRATION_CODE is not a valid header value")?,
        );
        headers.insert(
            "UserName",
            HeaderValue::from_str(&config.username)
                .context("AUTOTASK_API_USERNAME is not a valid header value")?,
        );
        let mut secret = HeaderValue::from_str(&config.secret)
            .context("AUTOTASK_API_SECRET is not a valid header value")?;
        secret.set_sensitive(true);
        headers.insert("Secret", secret);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build Autotask HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        entity: &str,
        search: &str,
        what: &str,
    ) -> Result<QueryResponse<T>, SyncError> {
        let url = format!("{}/{}/query", self.base_url, entity);
        let response = self
            .http
            .get(&url)
            .query(&[("search", search)])
            .send()
            .await
            .map_err(|e| classify_transport(e, what))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, what));
        }

        response.json().await.map_err(|e| classify_decode(e, what))
    }

    async fn write<B: Serialize + Sync>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: &B,
        what: &str,
    ) -> Result<ItemIdResponse, SyncError> {
        let response = self
            .http
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(|e| classify_transport(e, what))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, what));
        }

        response.json().await.map_err(|e| classify_decode(e, what))
    }

    /// 国コードを Autotask の国IDへ解決する
    ///
    /// 未知のコードは `None`（国は未設定のまま）
    async fn resolve_country_id(
        &self,
        country_code: Option<&str>,
    ) -> Result<Option<i64>, SyncError> {
        let Some(code) = country_code else {
            return Ok(None);
        };

        let search = eq_filter("countryCode", code);
        let body: QueryResponse<CountryItem> =
            self.query("Countries", &search, "query countries").await?;

        let id = body
            .items
            .into_iter()
            .find(|country| country.country_code.as_deref() == Some(code))
            .map(|country| country.id);
        if id.is_none() {
            warn!("No Autotask country found for code {code}");
        }
        Ok(id)
    }

    async fn build_payload(
        &self,
        company: &AtCompany,
        id: Option<i64>,
    ) -> Result<CompanyPayload, SyncError> {
        let country_id = self
            .resolve_country_id(company.country_code.as_deref())
            .await?;
        let bill_to_country_id = self
            .resolve_country_id(company.bill_to_country_code.as_deref())
            .await?;
        Ok(CompanyPayload::from_company(
            company,
            id,
            country_id,
            bill_to_country_id,
        ))
    }
}

#[async_trait]
impl CompanyDestination for AutotaskClient {
    async fn find_company(&self, company: &AtCompany) -> Result<Option<AtCompanyId>, SyncError> {
        let search = match company.match_key() {
            MatchKey::CompanyNumber(number) => eq_filter("companyNumber", &number),
            MatchKey::CompanyName(name) => eq_filter("companyName", &name),
        };

        let body: QueryResponse<CompanyItem> =
            self.query("Companies", &search, "query companies").await?;

        match body.items.as_slice() {
            [] => Ok(None),
            [only] => {
                debug!(
                    "Matched existing Autotask company {} for '{}'",
                    only.id, company.company_name
                );
                Ok(Some(AtCompanyId(only.id)))
            }
            items => Err(SyncError::Conflict(format!(
                "{} destination companies match '{}'",
                items.len(),
                company.company_name
            ))),
        }
    }

    async fn create_company(&self, company: &AtCompany) -> Result<AtCompanyId, SyncError> {
        let payload = self.build_payload(company, None).await?;
        let url = format!("{}/Companies", self.base_url);
        let created = self
            .write(reqwest::Method::POST, &url, &payload, "create company")
            .await?;
        let id = AtCompanyId(created.item_id);

        // Contact persons are registered only on the create path.
        for contact in &company.contacts {
            let contact_url = format!("{}/Companies/{}/Contacts", self.base_url, id);
            self.write(
                reqwest::Method::POST,
                &contact_url,
                &ContactPayload::from(contact),
                "create contact",
            )
            .await?;
        }

        Ok(id)
    }

    async fn update_company(
        &self,
        id: AtCompanyId,
        company: &AtCompany,
    ) -> Result<(), SyncError> {
        let payload = self.build_payload(company, Some(id.0)).await?;
        let url = format!("{}/Companies", self.base_url);
        self.write(reqwest::Method::PATCH, &url, &payload, "update company")
            .await?;
        Ok(())
    }
}
