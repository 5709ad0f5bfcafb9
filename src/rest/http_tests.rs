//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://discord.com/api/webhooks/1/abc").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let body = br#"{"content":"hi"}"#.to_vec();
        let req = HttpRequest::new(http::Method::POST, url).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::new(http::Method::GET, url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    fn response(status: u16, body: &[u8]) -> HttpResponse {
        HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            http::HeaderMap::new(),
            body.to_vec(),
        )
    }

    #[test]
    fn is_success_for_2xx() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
    }

    #[test]
    fn is_not_success_for_4xx_and_5xx() {
        assert!(!response(404, b"").is_success());
        assert!(!response(429, b"").is_success());
        assert!(!response(502, b"").is_success());
    }

    #[test]
    fn body_lossy_replaces_invalid_utf8() {
        let resp = response(500, &[b'o', b'k', 0xff]);
        assert_eq!(resp.body_lossy(), "ok\u{fffd}");
    }
}
