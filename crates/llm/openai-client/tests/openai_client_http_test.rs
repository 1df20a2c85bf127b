//! HTTP-level tests for [`openai_client::OpenAIClient`] against a mockito server.
//!
//! Covers the chat completion request shape (token cap, no streaming) and the model catalog.

use mockito::Matcher;
use openai_client::{ChatCompletionRequestUserMessageArgs, OpenAIClient};
use serde_json::json;

const TEST_KEY: &str = "sk-or-v1-test-key-0000";

fn completion_body(content: &str) -> String {
    json!({
        "id": "gen-1",
        "object": "chat.completion",
        "created": 1706529600,
        "model": "deepseek/deepseek-chat:free",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    })
    .to_string()
}

/// **Test: chat_completion sends model, max_tokens and stream=false, and returns the first choice text.**
///
/// **Setup:** Mock `/chat/completions` matching the partial JSON body.
/// **Action:** `chat_completion(model, [user], 500)`.
/// **Expected:** Returns the mocked content; the mock was hit once.
#[tokio::test]
async fn chat_completion_sends_token_cap_without_streaming() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "model": "deepseek/deepseek-chat:free",
            "max_tokens": 500,
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("[Матрица]\nОписание"))
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url(TEST_KEY.to_string(), server.url());
    let messages = vec![ChatCompletionRequestUserMessageArgs::default()
        .content("hi")
        .build()
        .unwrap()
        .into()];

    let text = client
        .chat_completion("deepseek/deepseek-chat:free", messages, 500)
        .await
        .unwrap();

    assert_eq!(text, "[Матрица]\nОписание");
    mock.assert_async().await;
}

/// **Test: list_models returns catalog ids in order, ignoring extra fields.**
#[tokio::test]
async fn list_models_returns_ids() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/models")
        .match_header("authorization", format!("Bearer {}", TEST_KEY).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [
                    { "id": "deepseek/deepseek-chat:free", "name": "DeepSeek", "context_length": 64000 },
                    { "id": "openai/gpt-4o", "name": "GPT-4o" }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url(TEST_KEY.to_string(), format!("{}/", server.url()));
    let models = client.list_models().await.unwrap();

    assert_eq!(models, vec!["deepseek/deepseek-chat:free", "openai/gpt-4o"]);
    mock.assert_async().await;
}

/// **Test: A non-success catalog status is an error.**
#[tokio::test]
async fn list_models_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/models")
        .with_status(401)
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url(TEST_KEY.to_string(), server.url());
    assert!(client.list_models().await.is_err());
}
