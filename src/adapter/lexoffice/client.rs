//! # Lexware Office Client
//!
//! contacts API への読み取り専用クライアント
//!
//! Bearer トークンで認証する。リトライは行わず、エラーは
//! `SyncError` に分類して呼び出し側へ返す。

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::adapter::config::LexofficeConfig;
use crate::adapter::http::{classify_decode, classify_status, classify_transport};
use crate::domain::entities::lex_contact::LexContact;
use crate::domain::error::SyncError;
use crate::domain::repositories::contact_source::ContactSource;

use super::models::{ContactDto, ContactPage};

/// ページあたりの取得件数
const PAGE_SIZE: u32 = 100;
/// HTTP呼び出しごとの明示的なタイムアウト
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Lexware Office REST API クライアント
pub struct LexofficeClient {
    http: reqwest::Client,
    base_url: String,
}

impl LexofficeClient {
    /// 新しいクライアントを作成する
    ///
    /// # Errors
    ///
    /// APIキーがヘッダー値として不正、またはHTTPクライアントの
    /// 構築に失敗した場合にエラーを返す
    pub fn new(config: &LexofficeConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .context("LEXOFFICE_API_KEY is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build Lexware Office HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T, SyncError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| classify_transport(e, what))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, what));
        }

        response.json::<T>().await.map_err(|e| classify_decode(e, what))
    }
}

#[async_trait]
impl ContactSource for LexofficeClient {
    async fn fetch_company(&self, id: &str) -> Result<LexContact, SyncError> {
        let what = format!("fetch contact {id}");
        let url = format!("{}/contacts/{}", self.base_url, id);

        let dto: ContactDto = self.get_json(&url, &[], &what).await?;
        dto.into_company()
            .ok_or_else(|| SyncError::NotFound(format!("contact {id} is not a company")))
    }

    async fn fetch_companies(&self) -> Result<Vec<LexContact>, SyncError> {
        let url = format!("{}/contacts", self.base_url);
        let mut companies = Vec::new();
        let mut page = 0u32;

        loop {
            let query = [("page", page.to_string()), ("size", PAGE_SIZE.to_string())];
            let body: ContactPage = self.get_json(&url, &query, "list contacts").await?;
            let total_pages = body.total_pages.max(1);
            debug!("Fetched contacts page {}/{}", page + 1, total_pages);

            companies.extend(body.content.into_iter().filter_map(ContactDto::into_company));

            page += 1;
            if page >= total_pages {
                break;
            }
        }

        Ok(companies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LexofficeConfig {
        LexofficeConfig {
            base_url: "https://api.lexoffice.example/v1/".to_string(),
            api_key: "lex-key".to_string(),
            pubkey_path: None,
        }
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = LexofficeClient::new(&config()).unwrap();
        assert_eq!(client.base_url, "https://api.lexoffice.example/v1");
    }

    #[test]
    fn test_new_rejects_invalid_api_key() {
        let mut cfg = config();
        cfg.api_key = "bad\nkey".to_string();
        assert!(LexofficeClient::new(&cfg).is_err());
    }
}
