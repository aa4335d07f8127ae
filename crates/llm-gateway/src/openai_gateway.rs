//! OpenAI-compatible implementation of [`CompletionGateway`]. Groq exposes the
//! same chat-completions API, so one implementation covers both providers via
//! the base URL.

use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use ostaad_core::{ChatRole, ChatTurn, ProviderError};
use std::time::Duration;
use tracing::instrument;

use crate::{CompletionGateway, SamplingParams};

pub struct OpenAiGateway {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiGateway {
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model,
            timeout,
        }
    }

    fn build_messages(
        system_prompt: &str,
        history: &[ChatTurn],
    ) -> Result<Vec<ChatCompletionRequestMessage>, OpenAIError> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(history.len() + 1);
        messages.push(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt)
                .build()?
                .into(),
        );
        for turn in history {
            let message = match turn.role {
                ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.content.clone())
                    .build()?
                    .into(),
                ChatRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.content.clone())
                    .build()?
                    .into(),
            };
            messages.push(message);
        }
        Ok(messages)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    #[instrument(skip(self, system_prompt, history, params), fields(model = %self.model))]
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatTurn],
        params: &SamplingParams,
    ) -> Result<String, ProviderError> {
        let messages = Self::build_messages(system_prompt, history).map_err(map_openai_error)?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(params.max_tokens)
            .temperature(params.temperature)
            .top_p(params.top_p)
            .frequency_penalty(params.frequency_penalty)
            .presence_penalty(params.presence_penalty)
            .build()
            .map_err(map_openai_error)?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))?
            .map_err(map_openai_error)?;

        match response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
        {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ProviderError::MalformedResponse(
                "completion contained no choices".to_string(),
            )),
        }
    }
}

fn map_openai_error(error: OpenAIError) -> ProviderError {
    match error {
        OpenAIError::Reqwest(e) => ProviderError::Network(e.to_string()),
        OpenAIError::ApiError(api) => {
            let lower = api.message.to_lowercase();
            if lower.contains("rate limit") || lower.contains("rate_limit") {
                ProviderError::RateLimited(api.message)
            } else if lower.contains("api key") || lower.contains("unauthorized") {
                ProviderError::Auth(api.message)
            } else {
                ProviderError::Api(api.message)
            }
        }
        OpenAIError::JSONDeserialize(e) => ProviderError::MalformedResponse(e.to_string()),
        other => ProviderError::Api(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_messages_prepends_system() {
        let history = vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")];
        let messages = OpenAiGateway::build_messages("persona", &history).unwrap();
        assert_eq!(messages.len(), 3);
        assert!(matches!(
            messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(messages[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(
            messages[2],
            ChatCompletionRequestMessage::Assistant(_)
        ));
    }
}
