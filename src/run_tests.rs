//! Tests for subcommand execution.

use std::sync::Mutex;

use discord_webhook::LoginOptions;
use discord_webhook::config::{Cli, Command};
use discord_webhook::rest::{HttpClient, HttpError, HttpRequest, HttpResponse};
use serde_json::json;

use super::*;

/// Mock HTTP client returning a single canned response.
#[derive(Debug)]
struct MockClient {
    status: http::StatusCode,
    body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(status: http::StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::new(
            self.status,
            http::HeaderMap::new(),
            self.body.clone().into_bytes(),
        ))
    }
}

fn command(args: &[&str]) -> Command {
    let mut full_args = vec!["discord-webhook"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args).command
}

fn webhook(client: MockClient) -> Webhook<MockClient> {
    Webhook::with_client(client, LoginOptions::from_credentials("111", "tok")).unwrap()
}

#[tokio::test]
async fn send_prints_partial_message() {
    let webhook = webhook(MockClient::new(http::StatusCode::NO_CONTENT, ""));

    let output = execute_with(&webhook, &command(&["send", "hello"]))
        .await
        .unwrap();

    let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed["content"], json!("hello"));
    assert_eq!(printed["channel_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn send_wait_prints_server_message() {
    let webhook = webhook(MockClient::new(
        http::StatusCode::OK,
        r#"{"id": "42", "channel_id": "1", "content": "hello"}"#,
    ));

    let output = execute_with(&webhook, &command(&["send", "hello", "--wait"]))
        .await
        .unwrap();

    let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed["id"], json!("42"));
}

#[tokio::test]
async fn fetch_prints_metadata() {
    let webhook = webhook(MockClient::new(
        http::StatusCode::OK,
        r#"{"type": 1, "id": "111", "name": "Bot", "avatar": "abc", "channel_id": "1", "guild_id": "2"}"#,
    ));

    let output = execute_with(&webhook, &command(&["fetch"])).await.unwrap();

    let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed["name"], json!("Bot"));
    assert_eq!(printed["guild_id"], json!("2"));
    assert_eq!(
        printed["avatar_url"],
        json!("https://cdn.discordapp.com/avatars/111/abc")
    );
    assert_eq!(webhook.name().as_deref(), Some("Bot"));
}

#[tokio::test]
async fn api_error_is_runtime_error() {
    let webhook = webhook(MockClient::new(http::StatusCode::NOT_FOUND, "{}"));

    let error = execute_with(&webhook, &command(&["fetch"]))
        .await
        .unwrap_err();

    assert!(matches!(error, RunError::Request(_)));
    assert!(!error.is_configuration());
}

#[tokio::test]
async fn missing_content_is_configuration_error() {
    let webhook = webhook(MockClient::new(http::StatusCode::NO_CONTENT, ""));

    let error = execute_with(&webhook, &command(&["send"]))
        .await
        .unwrap_err();

    assert!(error.is_configuration());
}

#[test]
fn invalid_webhook_url_is_configuration_error() {
    let error: RunError = Webhook::with_client(
        MockClient::new(http::StatusCode::OK, ""),
        LoginOptions::from_url("https://example.com/not-a-webhook"),
    )
    .unwrap_err()
    .into();

    assert!(error.is_configuration());
}

#[tokio::test]
async fn edit_patches_given_message() {
    let client = MockClient::new(
        http::StatusCode::OK,
        r#"{"id": "9", "channel_id": "1", "content": "x"}"#,
    );
    let webhook = webhook(client);

    execute_with(&webhook, &command(&["edit", "9", "x"]))
        .await
        .unwrap();

    let request = webhook.http_client().last_request();
    assert_eq!(request.method, http::Method::PATCH);
    assert_eq!(
        request.url.as_str(),
        "https://discord.com/api/webhooks/111/tok/messages/9"
    );
}

