use super::mocks::RecordingClient;
use axum::Router;
use mindmap_relay::{
    config::{CorsConfig, ProviderSettings},
    llm::{CompletionClient, HttpCompletionClient, Provider},
    relay::Relay,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::MockServer;

pub const SAMPLE_QUESTION: &str = "What is the capital of France?";

pub const SAMPLE_FREEMIND_XML: &str = r#"<map version="1.0.1"><node TEXT="Countries"><node TEXT="France"/><node TEXT="Germany"/><node TEXT="Italy"/></node></map>"#;

pub fn test_api_key(provider: Provider) -> &'static str {
    match provider {
        Provider::Claude => "sk-ant-test-key",
        Provider::ChatGpt => "sk-test-key",
    }
}

/// Settings pointing `provider` at `base_url` with a test credential.
pub fn settings_for(provider: Provider, base_url: &str) -> ProviderSettings {
    ProviderSettings {
        base_url: base_url.to_string(),
        model: provider.default_model().to_string(),
        max_tokens: 4000,
        api_key: test_api_key(provider).to_string(),
        timeout: None,
    }
}

/// An HTTP client whose providers both live under the given mock server.
pub fn client_for_mock(server: &MockServer) -> HttpCompletionClient {
    let base_url = format!("{}/v1", server.uri());
    HttpCompletionClient::new(
        settings_for(Provider::Claude, &base_url),
        settings_for(Provider::ChatGpt, &base_url),
    )
}

/// The production router with default CORS around an arbitrary completion client.
pub fn app_with_client(client: Arc<dyn CompletionClient>) -> Router {
    let state = AppState {
        relay: Relay::new(client),
    };
    server::router(state, &CorsConfig::default())
}

pub fn app_with_recording_client(client: RecordingClient) -> Router {
    app_with_client(Arc::new(client))
}

pub fn app_with_mock_provider(server: &MockServer) -> Router {
    app_with_client(Arc::new(client_for_mock(server)))
}

pub fn upstream_path(provider: Provider) -> String {
    format!("/v1{}", provider.endpoint_path())
}

/// A well-formed provider reply carrying `text` in the provider's usual place.
pub fn provider_reply(provider: Provider, text: &str) -> Value {
    match provider {
        Provider::Claude => json!({
            "id": "msg_mock",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "model": "claude-3-haiku-20240307",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 1}
        }),
        Provider::ChatGpt => json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "created": 1234567890,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": text},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11}
        }),
    }
}

pub fn expected_prompt(question: &str, freemind_xml: &str) -> String {
    format!(
        "Using the mind map represented by the following Freemind XML, please answer the following question: {}\n\n{}",
        question, freemind_xml
    )
}
