use anyhow::{Context, Result, anyhow};
use reqwest::{RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

use crate::schema::{CaseRecord, Commission, SearchKind, SearchRequest, State};

pub const DEFAULT_BASE_URL: &str = "https://lexi-dcdrc-api.onrender.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Remote source of states, commissions and cases.
pub trait CaseProvider: Send + Sync {
    fn fetch_states(&self) -> impl Future<Output = Result<Vec<State>>> + Send;

    fn fetch_commissions(
        &self,
        state_id: &str,
    ) -> impl Future<Output = Result<Vec<Commission>>> + Send;

    fn fetch_cases(
        &self,
        kind: SearchKind,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<CaseRecord>>> + Send;
}

#[derive(Clone)]
pub struct UpstreamClient {
    base_url: Url,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CaseSearchBody<'a> {
    state: &'a str,
    commission: &'a str,
    search_value: &'a str,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build upstream HTTP client")?;

        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("Invalid upstream base URL {:?}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Upstream base URL {} cannot carry a path", base_url);
        }

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Base URL with `segments` appended, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Upstream base URL {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Reachability check; any HTTP response counts as reachable.
    pub async fn ping(&self) -> Result<()> {
        self.client
            .get(self.base_url.clone())
            .send()
            .await
            .context("Upstream unreachable")?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        self.send_json(self.client.get(url.clone()), &url).await
    }

    /// Non-2xx statuses and undecodable bodies are errors.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> Result<T> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Upstream request to {} failed: {}", url, response.status());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

impl CaseProvider for UpstreamClient {
    async fn fetch_states(&self) -> Result<Vec<State>> {
        self.get_json(&["states"]).await
    }

    async fn fetch_commissions(&self, state_id: &str) -> Result<Vec<Commission>> {
        self.get_json(&["commissions", state_id]).await
    }

    async fn fetch_cases(&self, kind: SearchKind, request: &SearchRequest) -> Result<Vec<CaseRecord>> {
        let url = self.endpoint(&["cases", kind.as_str()])?;

        let body = CaseSearchBody {
            state: &request.state,
            commission: &request.commission,
            search_value: &request.value,
        };

        self.send_json(self.client.post(url.clone()).json(&body), &url).await
    }
}
