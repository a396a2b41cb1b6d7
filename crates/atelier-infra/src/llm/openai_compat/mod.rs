//! OpenAI-compatible chat provider implementation.
//!
//! A single [`OpenAiCompatibleProvider`] serves OpenAI and any endpoint that
//! speaks the same chat completions protocol, selected by base URL.
//!
//! Uses [`async_openai`] for type-safe request/response handling.

pub mod config;

use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest, FinishReason,
};
use async_openai::Client;
use secrecy::ExposeSecret;

use atelier_core::llm::provider::LlmProvider;
use atelier_observe::genai_attrs::OP_CHAT;
use atelier_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, StopReason, Usage,
};

use self::config::OpenAiCompatConfig;

/// Unified provider for any OpenAI-compatible chat API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
    timeout: Duration,
}

impl OpenAiCompatibleProvider {
    /// Create a new OpenAI-compatible provider from a configuration.
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            provider_name: config.provider_name,
            model: config.model,
            timeout: config.timeout,
        }
    }

    /// Create an OpenAI provider.
    ///
    /// Uses `https://api.openai.com/v1` as the base URL.
    pub fn openai(api_key: secrecy::SecretString, model: &str) -> Self {
        Self::new(config::openai_defaults(api_key, model))
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<CreateChatCompletionRequest, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::InvalidRequest(
                "completion request has no messages".to_string(),
            ));
        }

        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::System => {
                    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    })
                }
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
            })
            .collect();

        // Use the model from the request if set, otherwise fall back to config default
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        Ok(CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        })
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request)?;
        tracing::debug!(
            gen_ai.operation.name = OP_CHAT,
            gen_ai.request.model = %oai_request.model,
            messages = oai_request.messages.len(),
            "sending chat completion request"
        );

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(oai_request))
            .await
            .map_err(|_| LlmError::Provider {
                message: format!("request timed out after {}s", self.timeout.as_secs()),
            })?
            .map_err(map_openai_error)?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Provider {
                message: "response contained no choices".to_string(),
            })?;

        let stop_reason = match choice.finish_reason {
            Some(FinishReason::Length) => StopReason::MaxTokens,
            Some(FinishReason::ContentFilter) => StopReason::ContentFilter,
            _ => StopReason::EndTurn,
        };
        let content = choice.message.content.unwrap_or_default();
        if stop_reason == StopReason::ContentFilter && content.trim().is_empty() {
            return Err(LlmError::ContentPolicy(
                "completion withheld by the provider's content filter".to_string(),
            ));
        }

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            stop_reason,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded"
                || code == "insufficient_quota"
                || error_type == "rate_limit_error"
            {
                LlmError::RateLimited
            } else if code == "context_length_exceeded"
                || api_err.message.contains("maximum context length")
            {
                LlmError::ContextLengthExceeded
            } else if code == "content_policy_violation" || code == "content_filter" {
                LlmError::ContentPolicy(api_err.message.clone())
            } else if code == "server_error" || error_type == "server_error" {
                LlmError::Overloaded(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited,
            Some(503) => LlmError::Overloaded(err.to_string()),
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::llm::Message;
    use secrecy::SecretString;

    fn secret() -> SecretString {
        SecretString::from("sk-test".to_string())
    }

    fn wardrobe_request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4-turbo".to_string(),
            messages: vec![
                Message::system("You are a stylist"),
                Message::user("Act as a professional stylist"),
            ],
            max_tokens: 1500,
            temperature: Some(0.6),
        }
    }

    fn local_provider(base_url: String) -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(OpenAiCompatConfig {
            base_url,
            timeout: Duration::from_secs(5),
            ..config::openai_defaults(secret(), "gpt-4-turbo")
        })
    }

    #[test]
    fn test_openai_factory() {
        let provider = OpenAiCompatibleProvider::openai(secret(), "gpt-4-turbo");
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model, "gpt-4-turbo");
    }

    #[test]
    fn test_build_request_messages() {
        let provider = OpenAiCompatibleProvider::openai(secret(), "gpt-4-turbo");
        let oai_req = provider.build_request(&wardrobe_request()).unwrap();
        assert_eq!(oai_req.model, "gpt-4-turbo");
        // 1 system + 1 user
        assert_eq!(oai_req.messages.len(), 2);
        assert!(matches!(
            oai_req.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            oai_req.messages[1],
            ChatCompletionRequestMessage::User(_)
        ));
        assert_eq!(oai_req.max_completion_tokens, Some(1500));
        assert_eq!(oai_req.temperature, Some(0.6));
        assert!(oai_req.stream.is_none());
    }

    #[test]
    fn test_build_request_blank_model_uses_default() {
        let provider = OpenAiCompatibleProvider::openai(secret(), "gpt-4o");
        let request = CompletionRequest {
            model: String::new(),
            ..wardrobe_request()
        };
        let oai_req = provider.build_request(&request).unwrap();
        assert_eq!(oai_req.model, "gpt-4o");
    }

    #[test]
    fn test_build_request_rejects_empty_messages() {
        let provider = OpenAiCompatibleProvider::openai(secret(), "gpt-4o");
        let request = CompletionRequest {
            messages: vec![],
            ..wardrobe_request()
        };
        assert!(matches!(
            provider.build_request(&request),
            Err(LlmError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_against_local_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r####"{
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "created": 1700000000,
                    "model": "gpt-4-turbo",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "### Footwear ###\nLoafers"},
                        "finish_reason": "stop",
                        "logprobs": null
                    }],
                    "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
                }"####,
            )
            .expect(1)
            .create_async()
            .await;

        let response = local_provider(server.url())
            .complete(&wardrobe_request())
            .await
            .unwrap();
        assert_eq!(response.id, "chatcmpl-1");
        assert_eq!(response.content, "### Footwear ###\nLoafers");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.input_tokens, 120);
        assert_eq!(response.usage.output_tokens, 40);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_maps_bad_key_to_auth_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"error":{"message":"Incorrect API key provided: sk-test.","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#,
            )
            .create_async()
            .await;

        let err = local_provider(server.url())
            .complete(&wardrobe_request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_complete_without_choices_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id":"chatcmpl-2","object":"chat.completion","created":1700000000,"model":"gpt-4-turbo","choices":[]}"#,
            )
            .create_async()
            .await;

        let err = local_provider(server.url())
            .complete(&wardrobe_request())
            .await
            .unwrap_err();
        match err {
            LlmError::Provider { message } => assert!(message.contains("no choices")),
            other => panic!("expected Provider, got: {other}"),
        }
    }

    #[tokio::test]
    async fn test_complete_blocked_by_content_filter() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "chatcmpl-3",
                    "object": "chat.completion",
                    "created": 1700000000,
                    "model": "gpt-4-turbo",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": null},
                        "finish_reason": "content_filter",
                        "logprobs": null
                    }]
                }"#,
            )
            .create_async()
            .await;

        let err = local_provider(server.url())
            .complete(&wardrobe_request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::ContentPolicy(_)));
    }

    #[tokio::test]
    async fn test_complete_keeps_partial_filtered_content() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r####"{
                    "id": "chatcmpl-4",
                    "object": "chat.completion",
                    "created": 1700000000,
                    "model": "gpt-4-turbo",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "### Footwear ###\nLoafers"},
                        "finish_reason": "content_filter",
                        "logprobs": null
                    }]
                }"####,
            )
            .create_async()
            .await;

        let response = local_provider(server.url())
            .complete(&wardrobe_request())
            .await
            .unwrap();
        assert_eq!(response.stop_reason, StopReason::ContentFilter);
        assert_eq!(response.usage.input_tokens, 0);
    }
}
