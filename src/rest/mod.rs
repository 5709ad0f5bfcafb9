//! Request executor for the webhook REST API.
//!
//! This module provides:
//! - HTTP request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The HTTP client abstraction ([`HttpClient`]) and its reqwest implementation ([`ReqwestClient`])
//! - A JSON executor bound to a base endpoint ([`RestHandler`])
//!
//! No retry, backoff or rate-limit handling happens here.

mod client;
mod error;
mod handler;
mod http;

#[cfg(test)]
mod http_tests;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use client::ReqwestClient;
pub use error::{HttpError, RestError};
pub use handler::RestHandler;
pub use http::{HttpClient, HttpRequest, HttpResponse};
