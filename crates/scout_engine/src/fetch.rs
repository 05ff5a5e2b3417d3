use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Url;
use scout_core::{Repository, SearchRequest};
use scout_logging::scout_debug;

use crate::dto::{ApiErrorBody, SearchResponse};
use crate::{FailureKind, FetchError};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";
pub const DEFAULT_USER_AGENT: &str = concat!("repo-scout/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct FetchSettings {
    pub api_base_url: String,
    pub accept: String,
    pub user_agent: String,
    /// Raises the platform's rate limit; never required.
    pub token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl fmt::Debug for FetchSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchSettings")
            .field("api_base_url", &self.api_base_url)
            .field("accept", &self.accept)
            .field("user_agent", &self.user_agent)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Repository>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestSearchClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let base_url = Url::parse(&settings.api_base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as an api base", settings.api_base_url),
            ));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .default_headers(default_headers(&settings)?)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Transport, err.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// `{base}/search/repositories?q=...&sort=stars&order=...&per_page=...&page=...`
    pub fn endpoint(&self, request: &SearchRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["search", "repositories"]);
        }
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        url
    }
}

fn default_headers(settings: &FetchSettings) -> Result<HeaderMap, FetchError> {
    let invalid = |err: reqwest::header::InvalidHeaderValue| {
        FetchError::new(FailureKind::InvalidUrl, format!("invalid header value: {err}"))
    };

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_str(&settings.accept).map_err(invalid)?);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&settings.user_agent).map_err(invalid)?,
    );
    if let Some(token) = settings.token.as_deref().filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(invalid)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Repository>, FetchError> {
        let url = self.endpoint(request);
        scout_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&body)
                .map(|err| err.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(FetchError::new(
                FailureKind::Api {
                    status: status.as_u16(),
                },
                message,
            ));
        }

        let page: SearchResponse = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        Ok(page.items.into_iter().map(Repository::from).collect())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Transport, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::SortOrder;

    #[test]
    fn endpoint_keeps_base_path_and_encodes_clauses() {
        let settings = FetchSettings {
            api_base_url: "https://ghe.example.com/api/v3".to_string(),
            ..FetchSettings::default()
        };
        let client = ReqwestSearchClient::new(settings).unwrap();
        let request = SearchRequest {
            clauses: vec!["stars:>1".into(), "language:C++".into()],
            order: SortOrder::Asc,
            per_page: 15,
            page: 2,
        };

        let url = client.endpoint(&request);
        assert_eq!(url.path(), "/api/v3/search/repositories");
        assert_eq!(
            url.query(),
            Some("q=stars%3A%3E1+language%3AC%2B%2B&sort=stars&order=asc&per_page=15&page=2")
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let settings = FetchSettings {
            token: Some("secret-token".to_string()),
            ..FetchSettings::default()
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
