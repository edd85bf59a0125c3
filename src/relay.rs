use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use thiserror::Error;

/// Query parameters for one similarity lookup. All fields are optional on the
/// inbound side and fall back to the upstream API's documented sample values.
#[derive(Debug, Clone, Deserialize)]
pub struct MinwonQuery {
    #[serde(rename = "startPos", default = "default_start_pos")]
    pub start_pos: u32,
    #[serde(rename = "retCount", default = "default_ret_count")]
    pub ret_count: u32,
    #[serde(default = "default_searchword")]
    pub searchword: String,
    #[serde(default = "default_target")]
    pub target: String,
}

fn default_start_pos() -> u32 {
    1
}

fn default_ret_count() -> u32 {
    5
}

fn default_searchword() -> String {
    "근로자내일배움카드를 신청했습니다.다음 절차는 어떻게 되나요?".to_string()
}

fn default_target() -> String {
    "qna".to_string()
}

impl Default for MinwonQuery {
    fn default() -> Self {
        MinwonQuery {
            start_pos: default_start_pos(),
            ret_count: default_ret_count(),
            searchword: default_searchword(),
            target: default_target(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream answered with a non-2xx status. Carries the raw body text so
    /// the caller can see what the upstream actually said.
    #[error("upstream returned {status}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Connect/timeout/body-read/JSON-decode failure; no upstream body exists.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Percent-encodes one query-string component per RFC 3986: everything but
/// ASCII alphanumerics and `-_.~` is escaped, including `%`, `&`, `=`, space
/// and non-ASCII text.
pub fn encode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

pub struct RelayClient {
    http: reqwest::Client,
    upstream_url: String,
    // Already percent-encoded; must not be encoded again.
    service_key: String,
}

impl RelayClient {
    pub fn new(upstream_url: impl Into<String>, service_key: impl Into<String>) -> RelayClient {
        RelayClient {
            http: reqwest::Client::new(),
            upstream_url: upstream_url.into(),
            service_key: service_key.into(),
        }
    }

    /// Builds the outbound URL by hand. The upstream requires a pre-encoded
    /// serviceKey and searchword, so the query string cannot go through
    /// reqwest's serializer (it would encode both a second time).
    pub fn upstream_url(&self, query: &MinwonQuery) -> String {
        format!(
            "{}?serviceKey={}&startPos={}&retCount={}&searchword={}&target={}",
            self.upstream_url,
            self.service_key,
            query.start_pos,
            query.ret_count,
            encode_component(&query.searchword),
            encode_component(&query.target),
        )
    }

    /// Issues one GET against the upstream and returns its JSON body
    /// unchanged. startPos and retCount are forwarded as given, unclamped.
    pub async fn similar_complaints(&self, query: &MinwonQuery) -> Result<Value, RelayError> {
        let url = self.upstream_url(query);
        tracing::info!(
            start_pos = query.start_pos,
            ret_count = query.ret_count,
            target = %query.target,
            "querying upstream minwon API"
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "upstream returned an error status");
            return Err(RelayError::UpstreamStatus { status, body });
        }

        Ok(response.json::<Value>().await?)
    }
}
