//! Bounded HTTP client.
//!
//! Every request runs against a single deadline that covers both sending
//! the request and reading the body. A request that does not complete in
//! time fails with [`FetchError::Timeout`] and the in-flight transfer is
//! dropped.

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, instrument, warn};

use crate::error::FetchError;

/// User agent string for cpstat.
pub const USER_AGENT: &str = concat!("cpstat/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Request
// ============================================================================

/// A single outbound request.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl FetchRequest {
    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Creates a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Adds a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets a JSON body and the matching content type.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(self)
    }

    /// Returns the request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

// ============================================================================
// Response
// ============================================================================

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    status: StatusCode,
    body: String,
}

impl FetchResponse {
    /// Creates a response from parts.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns true for 2xx responses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns the body.
    pub fn into_text(self) -> String {
        self.body
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Returns an error for non-2xx responses.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(status_error(self.status))
        }
    }
}

/// Builds the error for a non-success status.
pub fn status_error(status: StatusCode) -> FetchError {
    FetchError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client shared by all platform adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self { inner: client })
    }

    /// Wraps an existing reqwest client.
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }

    /// Performs a request bounded by `timeout`.
    ///
    /// Non-2xx responses are returned as-is so callers can inspect the body.
    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub async fn fetch(
        &self,
        request: FetchRequest,
        timeout: Duration,
    ) -> Result<FetchResponse, FetchError> {
        let timeout_ms = duration_ms(timeout);
        let deadline = Instant::now() + timeout;

        let mut builder = self
            .inner
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        debug!("Sending request");
        let response = timeout_at(deadline, builder.send())
            .await
            .map_err(|_| {
                warn!(timeout_ms, "Request timed out before response");
                FetchError::Timeout(timeout_ms)
            })??;

        let status = response.status();
        let body = timeout_at(deadline, response.text())
            .await
            .map_err(|_| {
                warn!(timeout_ms, "Request timed out reading body");
                FetchError::Timeout(timeout_ms)
            })??;

        debug!(status = %status, bytes = body.len(), "Response received");
        Ok(FetchResponse { status, body })
    }

    /// GETs a URL and decodes a JSON body. Non-2xx is an error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<T, FetchError> {
        self.fetch(FetchRequest::get(url), timeout)
            .await?
            .error_for_status()?
            .json()
    }

    /// GETs a URL and returns the body text. Non-2xx is an error.
    pub async fn get_text(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        Ok(self
            .fetch(FetchRequest::get(url), timeout)
            .await?
            .error_for_status()?
            .into_text())
    }

    /// POSTs a JSON body and decodes a JSON response. Non-2xx is an error.
    pub async fn post_json<B, T>(
        &self,
        url: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = FetchRequest::post(url).json(body)?;
        self.fetch(request, timeout)
            .await?
            .error_for_status()?
            .json()
    }
}

fn duration_ms(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}
