//! HTTP-level tests for the Gemini client against a mock server.
//!
//! The client is blocking, so each call runs (and is dropped) on a
//! `spawn_blocking` thread.

use std::time::Duration;

use commitgen::error::RemoteFailure;
use commitgen::fallback;
use commitgen::generator::Generator;
use commitgen::llm::TextGenerator;
use commitgen::llm::gemini::{GeminiClient, GeminiSettings};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-1.5-flash";
const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
const DIFF: &str = "+function foo(){}\n-old line\n";

fn settings(server_uri: &str, timeout: Duration) -> GeminiSettings {
    GeminiSettings {
        api_key: "test-key".to_string(),
        model: MODEL.to_string(),
        api_base_url: format!("{server_uri}/v1beta"),
        timeout,
    }
}

async fn request_with_timeout(server_uri: String, timeout: Duration) -> Result<String, RemoteFailure> {
    tokio::task::spawn_blocking(move || {
        let client = GeminiClient::new(settings(&server_uri, timeout)).expect("client");
        client.request(DIFF)
    })
    .await
    .expect("blocking task panicked")
}

async fn request(server: &MockServer) -> Result<String, RemoteFailure> {
    request_with_timeout(server.uri(), Duration::from_secs(5)).await
}

fn text_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {"content": {"parts": [{"text": text}], "role": "model"}, "finishReason": "STOP"}
        ]
    })
}

async fn server_returning(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn success_returns_first_text_part() {
    let server = server_returning(
        ResponseTemplate::new(200).set_body_json(text_body("feat: a\nfix: b\nchore: c")),
    )
    .await;

    assert_eq!(request(&server).await.unwrap(), "feat: a\nfix: b\nchore: c");
}

#[tokio::test]
async fn sends_key_header_prompt_and_fixed_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {"maxOutputTokens": 150, "topK": 40}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("feat: ok")))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(request(&server).await.unwrap(), "feat: ok");

    let received = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("conventional commit format"));
    assert!(prompt.contains(DIFF));
    assert!(prompt.contains("fix: resolve memory leak in parser"));
}

#[tokio::test]
async fn forbidden_is_classified() {
    let server = server_returning(ResponseTemplate::new(403).set_body_string("denied")).await;
    assert_eq!(request(&server).await, Err(RemoteFailure::Forbidden));
}

#[tokio::test]
async fn rate_limit_is_classified() {
    let server = server_returning(ResponseTemplate::new(429)).await;
    assert_eq!(request(&server).await, Err(RemoteFailure::RateLimited));
}

#[tokio::test]
async fn other_statuses_keep_the_code() {
    let server = server_returning(ResponseTemplate::new(500)).await;
    assert_eq!(request(&server).await, Err(RemoteFailure::Other(500)));

    let server = server_returning(ResponseTemplate::new(404)).await;
    assert_eq!(request(&server).await, Err(RemoteFailure::Other(404)));
}

#[tokio::test]
async fn envelope_without_text_is_empty_payload() {
    let server =
        server_returning(ResponseTemplate::new(200).set_body_json(json!({"candidates": []}))).await;
    assert_eq!(request(&server).await, Err(RemoteFailure::EmptyPayload));
}

#[tokio::test]
async fn malformed_body_is_empty_payload() {
    let server = server_returning(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
    assert_eq!(request(&server).await, Err(RemoteFailure::EmptyPayload));
}

#[tokio::test]
async fn slow_server_times_out_as_network_failure() {
    let server = server_returning(
        ResponseTemplate::new(200)
            .set_body_json(text_body("feat: too late"))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let result = request_with_timeout(server.uri(), Duration::from_millis(200)).await;
    assert!(matches!(result, Err(RemoteFailure::Network(_))), "{result:?}");
}

#[tokio::test]
async fn unreachable_server_is_network_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uri = format!("http://127.0.0.1:{port}");

    let result = request_with_timeout(uri, Duration::from_secs(2)).await;
    assert!(matches!(result, Err(RemoteFailure::Network(_))), "{result:?}");
}

#[tokio::test]
async fn connection_check_uses_its_own_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_partial_json(json!({
            "generationConfig": {"maxOutputTokens": 50}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("Connection successful!")))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let reply = tokio::task::spawn_blocking(move || {
        let client = GeminiClient::new(settings(&uri, Duration::from_secs(5))).expect("client");
        client.check_connection()
    })
    .await
    .unwrap();

    assert_eq!(reply.unwrap(), "Connection successful!");
}

#[tokio::test]
async fn live_generator_falls_back_on_every_http_failure() {
    for status in [403u16, 429, 500] {
        let server = server_returning(ResponseTemplate::new(status)).await;
        let uri = server.uri();

        let suggestions = tokio::task::spawn_blocking(move || {
            let client = GeminiClient::new(settings(&uri, Duration::from_secs(5))).expect("client");
            Generator::with_remote(Box::new(client)).generate(DIFF)
        })
        .await
        .unwrap();

        assert_eq!(suggestions, fallback::derive(DIFF), "status {status}");
    }
}

#[tokio::test]
async fn live_generator_parses_successful_reply() {
    let server = server_returning(
        ResponseTemplate::new(200).set_body_json(text_body("  feat: add foo\n\nfix: drop old line\n")),
    )
    .await;
    let uri = server.uri();

    let suggestions = tokio::task::spawn_blocking(move || {
        let client = GeminiClient::new(settings(&uri, Duration::from_secs(5))).expect("client");
        Generator::with_remote(Box::new(client)).generate(DIFF)
    })
    .await
    .unwrap();

    assert_eq!(
        suggestions.as_slice(),
        [
            "feat: add foo",
            "fix: drop old line",
            commitgen::parser::GENERIC_PAD
        ]
    );
}
