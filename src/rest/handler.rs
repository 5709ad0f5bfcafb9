//! JSON request executor bound to a base endpoint.

use std::borrow::Cow;

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderValue, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{HttpClient, HttpRequest, HttpResponse, RestError};
use crate::constants;

/// Issues JSON requests against a base endpoint.
///
/// Targets are either paths appended to the base URL (`/{id}/{token}`)
/// or absolute `http(s)://` URLs used as-is. Every call is a single
/// attempt: non-2xx responses become [`RestError::Transport`] and
/// transport failures become [`RestError::Network`].
#[derive(Debug, Clone)]
pub struct RestHandler<H> {
    client: H,
    base_url: String,
}

impl<H> RestHandler<H> {
    /// Creates a handler sending requests through `client`.
    ///
    /// A trailing `/` on `base_url` is dropped so paths can always
    /// start with `/`.
    #[must_use]
    pub fn new(client: H, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Returns the base URL that relative targets are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Resolves a path or absolute URL into the request URL.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidTarget`] if the result is not a valid URL.
    pub fn resolve(&self, target: &str) -> Result<url::Url, RestError> {
        let raw = if is_absolute(target) {
            Cow::Borrowed(target)
        } else {
            Cow::Owned(format!("{}{target}", self.base_url))
        };
        url::Url::parse(&raw).map_err(RestError::InvalidTarget)
    }
}

impl<H: HttpClient> RestHandler<H> {
    /// Sends a GET and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`RestError`].
    pub async fn get<T: DeserializeOwned>(&self, target: &str) -> Result<T, RestError> {
        let response = self.execute::<()>(Method::GET, target, None).await?;
        decode(&response)
    }

    /// Sends a POST with a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`RestError`].
    pub async fn post<B>(&self, target: &str, body: &B) -> Result<(), RestError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.execute(Method::POST, target, Some(body)).await?;
        Ok(())
    }

    /// Sends a POST with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`RestError`].
    pub async fn post_json<B, T>(&self, target: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, target, Some(body)).await?;
        decode(&response)
    }

    /// Sends a PATCH with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`RestError`].
    pub async fn patch<B, T>(&self, target: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PATCH, target, Some(body)).await?;
        decode(&response)
    }

    async fn execute<B>(
        &self,
        method: Method,
        target: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, RestError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.resolve(target)?;
        let mut request = HttpRequest::new(method.clone(), url).with_header(
            USER_AGENT,
            HeaderValue::from_static(constants::USER_AGENT),
        );

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(RestError::Encode)?;
            request = request
                .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .with_body(bytes);
        }

        // The URL carries the webhook token, so only the method is logged.
        tracing::debug!(%method, "Sending webhook API request");
        let response = self.client.request(request).await?;
        tracing::trace!(%method, status = %response.status, "Webhook API responded");

        if response.is_success() {
            Ok(response)
        } else {
            Err(RestError::Transport {
                status: response.status,
                body: response.body_lossy(),
            })
        }
    }
}

fn is_absolute(target: &str) -> bool {
    target.starts_with("https://") || target.starts_with("http://")
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, RestError> {
    serde_json::from_slice(&response.body).map_err(|source| RestError::Decode {
        source,
        body: response.body_lossy(),
    })
}
