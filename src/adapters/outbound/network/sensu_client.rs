use crate::alert_view::domain::SensuEvent;
use crate::ports::outbound::EventSource;
use crate::shared::error::AlertViewError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Response header carrying the token of the next event chunk
const CONTINUE_HEADER: &str = "Sensu-Continue";

/// Upper bound of chunks followed for one namespace
const MAX_PAGES: usize = 10_000;

/// Connection settings of one Sensu upstream
#[derive(Debug, Clone)]
pub struct SensuClientOptions {
    pub name: String,
    pub uri: String,
    pub timeout: Duration,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Empty means every namespace
    pub namespaces: Vec<String>,
    /// Events per chunk, 0 disables chunking
    pub event_limit: usize,
}

impl SensuClientOptions {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            timeout: DEFAULT_TIMEOUT,
            username: None,
            password: None,
            namespaces: Vec::new(),
            event_limit: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AccessTokens {
    access_token: String,
}

/// SensuApiClient adapter pulling events from the Sensu v2 core API
///
/// Authenticates lazily with `GET /auth` and caches the access token until
/// a request is rejected with 401. Every page request is retried with a
/// linear backoff.
pub struct SensuApiClient {
    name: String,
    uri: String,
    base_url: Url,
    client: reqwest::Client,
    username: Option<String>,
    password: Option<String>,
    namespaces: Vec<String>,
    event_limit: usize,
    max_retries: u32,
    access_token: Mutex<Option<String>>,
}

impl SensuApiClient {
    pub fn new(options: SensuClientOptions) -> Result<Self> {
        let mut base_url =
            Url::parse(&options.uri).map_err(|e| AlertViewError::UpstreamRegistration {
                name: options.name.clone(),
                reason: format!("invalid URI: {}", e),
            })?;
        // API paths are joined relative to the base, which keeps a path prefix
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        for namespace in &options.namespaces {
            Self::validate_url_component(namespace, "Namespace")?;
        }

        let user_agent = format!("alertrow/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            name: options.name,
            uri: options.uri,
            base_url,
            client,
            username: options.username,
            password: options.password,
            namespaces: options.namespaces,
            event_limit: options.event_limit,
            max_retries: 3,
            access_token: Mutex::new(None),
        })
    }

    /// URI with any embedded credentials removed, safe to log
    pub fn sanitized_uri(&self) -> String {
        sanitize_uri(&self.uri)
    }

    /// Validates a value used as a URL path segment
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} must not be empty", component_type);
        }
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }
        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }
        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
        }
        Ok(())
    }

    /// API path listing events of `namespace`, or of all namespaces
    fn events_path(namespace: Option<&str>) -> String {
        match namespace {
            Some(ns) => format!("api/core/v2/namespaces/{}/events", urlencoding::encode(ns)),
            None => "api/core/v2/events".to_string(),
        }
    }

    fn page_url(&self, path: &str, continue_token: Option<&str>) -> Result<Url> {
        let mut query = Vec::new();
        if self.event_limit > 0 {
            query.push(format!("limit={}", self.event_limit));
        }
        if let Some(token) = continue_token {
            query.push(format!("continue={}", urlencoding::encode(token)));
        }
        let mut target = path.to_string();
        if !query.is_empty() {
            target.push('?');
            target.push_str(&query.join("&"));
        }
        Ok(self.base_url.join(&target)?)
    }

    /// Returns the cached access token, authenticating first if needed
    ///
    /// Upstreams without configured credentials are queried anonymously.
    async fn ensure_credentials(&self) -> Result<Option<String>> {
        let Some(username) = self.username.as_deref() else {
            return Ok(None);
        };

        let mut cached = self.access_token.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(Some(token.clone()));
        }

        let url = self.base_url.join("auth")?;
        let response = self
            .client
            .get(url)
            .basic_auth(username, self.password.as_deref())
            .send()
            .await
            .map_err(|e| AlertViewError::AuthenticationFailed {
                name: self.name.clone(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(AlertViewError::AuthenticationFailed {
                name: self.name.clone(),
                details: format!("/auth returned status code {}", response.status()),
            }
            .into());
        }

        let tokens: AccessTokens = response.json().await?;
        *cached = Some(tokens.access_token.clone());
        Ok(Some(tokens.access_token))
    }

    async fn forget_credentials(&self) {
        *self.access_token.lock().await = None;
    }

    /// Fetches one chunk of events and the token of the next one
    async fn fetch_page(
        &self,
        path: &str,
        continue_token: Option<&str>,
    ) -> Result<(Vec<SensuEvent>, Option<String>)> {
        let url = self.page_url(path, continue_token)?;
        let mut request = self.client.get(url);
        if let Some(token) = self.ensure_credentials().await? {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // token expired or revoked, authenticate again on retry
            self.forget_credentials().await;
            anyhow::bail!("Sensu API rejected the access token ({})", status);
        }
        if !status.is_success() {
            anyhow::bail!("Sensu API returned status code {}", status);
        }

        let next = response
            .headers()
            .get(CONTINUE_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        let events: Vec<SensuEvent> = response.json().await?;
        Ok((events, next))
    }

    /// Fetches one chunk with retry logic
    async fn fetch_page_with_retry(
        &self,
        path: &str,
        continue_token: Option<&str>,
    ) -> Result<(Vec<SensuEvent>, Option<String>)> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_page(path, continue_token).await {
                Ok(page) => return Ok(page),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no request was attempted")))
    }

    async fn fetch_namespace(&self, namespace: Option<&str>) -> Result<Vec<SensuEvent>> {
        let path = Self::events_path(namespace);
        let mut events = Vec::new();
        let mut continue_token: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let (page, next) = self
                .fetch_page_with_retry(&path, continue_token.as_deref())
                .await
                .map_err(|e| AlertViewError::UpstreamRequest {
                    name: self.name.clone(),
                    details: format!("{}: {:#}", path, e),
                })?;
            events.extend(page);
            match next {
                Some(token) => continue_token = Some(token),
                None => return Ok(events),
            }
        }

        anyhow::bail!(
            "Sensu upstream '{}' returned more than {} chunks for {}",
            self.name,
            MAX_PAGES,
            path
        )
    }
}

#[async_trait]
impl EventSource for SensuApiClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    async fn fetch_events(&self) -> Result<Vec<SensuEvent>> {
        if self.namespaces.is_empty() {
            return self.fetch_namespace(None).await;
        }
        let mut events = Vec::new();
        for namespace in &self.namespaces {
            events.extend(self.fetch_namespace(Some(namespace)).await?);
        }
        Ok(events)
    }
}

/// Removes user info from a URI; unparsable input is returned unchanged
pub fn sanitize_uri(uri: &str) -> String {
    match Url::parse(uri) {
        Ok(mut url) => {
            // both setters only fail for cannot-be-a-base URLs
            let _ = url.set_username("");
            let _ = url.set_password(None);
            url.to_string()
        }
        Err(_) => uri.to_string(),
    }
}
