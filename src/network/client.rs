//! GitHub REST client - account lookup and repository listing

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Url;

use crate::error::{ExplorerError, Result};
use crate::models::{Account, Repository};

/// Read-only client for the two endpoints the explorer needs
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Self {
        GitHubClient {
            client: create_client(user_agent),
            base_url: base_url.into(),
        }
    }

    /// Resolve a user name to an account. Surrounding whitespace is trimmed;
    /// an empty name is rejected without touching the network.
    pub async fn fetch_account(&self, name: &str) -> Result<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExplorerError::EmptyQuery);
        }

        let lookup_failed = |reason: String| ExplorerError::LookupFailed {
            name: name.to_string(),
            reason,
        };

        let url = self.endpoint(&["users", name]).map_err(lookup_failed)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| lookup_failed(describe_send_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(lookup_failed(format!("HTTP {}", status.as_u16())));
        }

        response
            .json::<Account>()
            .await
            .map_err(|e| lookup_failed(format!("invalid payload: {}", e)))
    }

    /// List the public repositories of `login`, in the order the API returns them
    pub async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>> {
        let list_failed = |reason: String| ExplorerError::ListFailed {
            login: login.to_string(),
            reason,
        };

        let url = self
            .endpoint(&["users", login, "repos"])
            .map_err(list_failed)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| list_failed(describe_send_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(list_failed(format!("HTTP {}", status.as_u16())));
        }

        response
            .json::<Vec<Repository>>()
            .await
            .map_err(|e| list_failed(format!("invalid payload: {}", e)))
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| format!("invalid base url '{}': {}", self.base_url, e))?;
        url.path_segments_mut()
            .map_err(|_| format!("base url '{}' cannot have a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn describe_send_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("request failed: {}", e)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client(user_agent: &str) -> reqwest::Client {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    if let Ok(value) = HeaderValue::from_str(user_agent) {
        headers.insert(USER_AGENT, value);
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
