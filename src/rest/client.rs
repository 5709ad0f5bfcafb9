//! reqwest-backed [`HttpClient`].

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// The HTTP client [`Webhook::new`](crate::Webhook::new) uses.
///
/// Requests carry no timeout unless built with
/// [`ReqwestClient::with_timeout`] or [`ReqwestClient::from_client`].
/// Errors never include the request URL, since webhook paths embed the token.
///
/// # Example
///
/// ```no_run
/// use discord_webhook::rest::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://discord.com/api/webhooks/1/token")?;
/// let response = client.request(HttpRequest::new(http::Method::GET, url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Wraps a default `reqwest::Client`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the underlying client cannot
    /// be initialized (e.g. the TLS backend fails to load).
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Connection(Box::new(e)))?;
        Ok(Self { inner })
    }

    /// Wraps an already configured reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(into_http_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(into_http_error)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// Maps a reqwest error, dropping the request URL so the token in the
/// webhook path never reaches error messages.
fn into_http_error(e: reqwest::Error) -> HttpError {
    let e = e.without_url();
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
