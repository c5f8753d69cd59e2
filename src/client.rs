//! ProcessOut API client
//!
//! [`ProcessOut`] holds credentials, API version and host. It is immutable
//! once built and cheap to clone: clones share the same connection pool.

use crate::envelope;
use crate::options::Options;
use crate::request::ApiRequest;
use crate::resources::{Customers, Invoices, Subscriptions, Transactions};
use crate::{ProcessOutError, Result, DEFAULT_API_VERSION, DEFAULT_HOST};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the ProcessOut API
#[derive(Clone)]
pub struct ProcessOut {
    api_version: String,
    project_id: String,
    project_secret: String,
    host: String,
    http: Client,
}

impl std::fmt::Debug for ProcessOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessOut")
            .field("api_version", &self.api_version)
            .field("project_id", &self.project_id)
            .field("project_secret", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}

impl ProcessOut {
    /// Create a client with the default host and API version
    pub fn new(project_id: impl Into<String>, project_secret: impl Into<String>) -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            project_id: project_id.into(),
            project_secret: project_secret.into(),
            host: DEFAULT_HOST.to_string(),
            http: Client::new(),
        }
    }

    /// Start building a client with custom settings
    pub fn builder(
        project_id: impl Into<String>,
        project_secret: impl Into<String>,
    ) -> ProcessOutBuilder {
        ProcessOutBuilder::new(project_id, project_secret)
    }

    /// Build a client from `PROCESSOUT_*` environment variables
    ///
    /// `PROCESSOUT_PROJECT_ID` and `PROCESSOUT_PROJECT_SECRET` are required;
    /// `PROCESSOUT_HOST`, `PROCESSOUT_API_VERSION` and `PROCESSOUT_TIMEOUT_SECS`
    /// are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a client from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_id = lookup("PROCESSOUT_PROJECT_ID")
            .ok_or_else(|| ProcessOutError::config("PROCESSOUT_PROJECT_ID is required"))?;
        let project_secret = lookup("PROCESSOUT_PROJECT_SECRET")
            .ok_or_else(|| ProcessOutError::config("PROCESSOUT_PROJECT_SECRET is required"))?;

        let mut builder = Self::builder(project_id, project_secret);

        if let Some(host) = lookup("PROCESSOUT_HOST") {
            builder = builder.host(host);
        }

        if let Some(version) = lookup("PROCESSOUT_API_VERSION") {
            builder = builder.api_version(version);
        }

        if let Some(timeout) = lookup("PROCESSOUT_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|e| {
                ProcessOutError::config(format!("Invalid PROCESSOUT_TIMEOUT_SECS: {}", e))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// API version sent with every request
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Project ID, used as the basic-auth username
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub(crate) fn project_secret(&self) -> &str {
        &self.project_secret
    }

    /// Base URL requests are made against
    pub fn host(&self) -> &str {
        &self.host
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Invoice operations
    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    /// Customer operations
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// Subscription operations
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    /// Transaction operations
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    /// Send a request and return the payload stored under `payload_key`
    pub async fn call<T>(
        &self,
        request: ApiRequest,
        payload_key: &str,
        options: Option<&Options>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.send(request, options).await?;
        envelope::decode_payload(&body, payload_key)
    }

    /// Send a request and return the list stored under `payload_key`
    pub async fn call_list<T>(
        &self,
        request: ApiRequest,
        payload_key: &str,
        options: Option<&Options>,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let body = self.send(request, options).await?;
        envelope::decode_list(&body, payload_key)
    }

    /// Send a request whose response carries no payload
    pub async fn call_ack(&self, request: ApiRequest, options: Option<&Options>) -> Result<()> {
        let body = self.send(request, options).await?;
        envelope::decode_ack(&body)
    }

    async fn send(&self, request: ApiRequest, options: Option<&Options>) -> Result<Vec<u8>> {
        let default_options = Options::default();
        let options = options.unwrap_or(&default_options);

        tracing::debug!(method = %request.method(), path = %request.path(), "sending request");
        let request = request.build(self, options)?;

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(body.to_vec())
    }
}

/// Builder for [`ProcessOut`]
#[derive(Clone)]
pub struct ProcessOutBuilder {
    project_id: String,
    project_secret: String,
    api_version: String,
    host: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl std::fmt::Debug for ProcessOutBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessOutBuilder")
            .field("project_id", &self.project_id)
            .field("project_secret", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ProcessOutBuilder {
    fn new(project_id: impl Into<String>, project_secret: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            project_secret: project_secret.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set a timeout applied to every request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the settings and build the client
    pub fn build(self) -> Result<ProcessOut> {
        if self.project_id.is_empty() {
            return Err(ProcessOutError::config("Project ID cannot be empty"));
        }

        if self.api_version.is_empty() {
            return Err(ProcessOutError::config("API version cannot be empty"));
        }

        let host = url::Url::parse(&self.host)
            .map_err(|e| ProcessOutError::config(format!("Invalid host '{}': {}", self.host, e)))?;
        if host.scheme() != "http" && host.scheme() != "https" {
            return Err(ProcessOutError::config("Host must start with http:// or https://"));
        }

        let mut client_builder = Client::builder();

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("processout-rust/{}", crate::VERSION));
        client_builder = client_builder.user_agent(user_agent);

        let http = client_builder
            .build()
            .map_err(|e| ProcessOutError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(ProcessOut {
            api_version: self.api_version,
            project_id: self.project_id,
            project_secret: self.project_secret,
            host: self.host.trim_end_matches('/').to_string(),
            http,
        })
    }
}
