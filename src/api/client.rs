//! Stateless wrapper over the two remote lookups.
//!
//! Both calls collapse every transport, status, and decode failure into
//! `None` so command handlers render one uniform "fetch failed" message;
//! the underlying cause is only logged. `None` is distinct from an empty
//! result list, which is a successful response.

use serde::de::DeserializeOwned;
use tracing::warn;

use super::model::{DetailResponse, SearchResponse, ServerDetail};
use crate::constants::{DETAIL_API_URL, LIST_API_URL, SEARCH_PAGE_SIZE};

#[derive(Clone)]
pub struct ServerQueryClient {
    http: reqwest::Client,
    list_url: String,
    detail_url: String,
}

impl ServerQueryClient {
    pub fn new() -> Self {
        Self::with_urls(LIST_API_URL, DETAIL_API_URL)
    }

    /// Endpoint override used by tests and self-hosted API mirrors.
    pub fn with_urls(list_url: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            list_url: list_url.into(),
            detail_url: detail_url.into(),
        }
    }

    /// First page of servers matching `keyword`. Assumes a non-empty keyword;
    /// the command layer validates before calling.
    pub async fn search(&self, keyword: &str) -> Option<SearchResponse> {
        let page_size = SEARCH_PAGE_SIZE.to_string();
        let request = self.http.post(&self.list_url).query(&[
            ("name", keyword),
            ("pageCount", page_size.as_str()),
            ("page", "0"),
        ]);
        self.dispatch(request, "search").await
    }

    /// Full detail record for one server. A response without a `Server`
    /// payload (unknown or expired id) is treated the same as a failure.
    pub async fn fetch_detail(&self, server_id: &str) -> Option<ServerDetail> {
        let request = self
            .http
            .post(&self.detail_url)
            .query(&[("id", server_id), ("forceUpdate", "false")]);
        let envelope: DetailResponse = self.dispatch(request, "detail").await?;
        if envelope.server.is_none() {
            warn!(target: "dst.api", server_id = %server_id, "detail response carried no server record");
        }
        envelope.server
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        call: &str,
    ) -> Option<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(target: "dst.api", call, error = %e, "request failed");
                return None;
            }
        };
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!(target: "dst.api", call, error = %e, "non-success status");
                return None;
            }
        };
        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(target: "dst.api", call, error = %e, "response failed to decode");
                None
            }
        }
    }
}

impl Default for ServerQueryClient {
    fn default() -> Self {
        Self::new()
    }
}
