//! Shared mock HTTP client for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that replays a queue of responses and records requests.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// A single `204 No Content` response, as the webhook POST returns.
    pub fn no_content() -> Self {
        Self::new(vec![Ok(response(http::StatusCode::NO_CONTENT, ""))])
    }

    /// A single `200 OK` response carrying `body` as JSON.
    pub fn json(body: &serde_json::Value) -> Self {
        Self::new(vec![Ok(response(http::StatusCode::OK, &body.to_string()))])
    }

    /// A single response with the given status and raw body.
    pub fn status(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(response(status, body))])
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// Parses the body of the last request as JSON.
    pub fn last_json_body(&self) -> serde_json::Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockClient ran out of responses")
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

pub fn response(status: http::StatusCode, body: &str) -> HttpResponse {
    HttpResponse::new(status, http::HeaderMap::new(), body.as_bytes().to_vec())
}
