//! Azure OpenAI chat-completions client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AzureOpenAiSettings;
use crate::domain::ports::CompletionClient;
use crate::error::CompletionError;

const CONTENT_FILTER: &str = "content_filter";

/// Pick the provider client once, based on the loaded settings
pub fn completion_client_from_settings(
    settings: &AzureOpenAiSettings,
    http: Client,
) -> Arc<dyn CompletionClient> {
    if settings.is_configured() {
        let client = AzureOpenAiClient::new(http, settings);
        tracing::info!(
            endpoint = %client.endpoint,
            deployment = %client.deployment,
            "Azure OpenAI client initialized"
        );
        Arc::new(client)
    } else {
        tracing::warn!(
            "Azure OpenAI configuration is missing or using placeholder values; \
             messages will not be transformed"
        );
        Arc::new(UnconfiguredClient)
    }
}

/// Implementation of the completion client for an Azure OpenAI deployment
pub struct AzureOpenAiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
}

impl AzureOpenAiClient {
    pub fn new(http: Client, settings: &AzureOpenAiSettings) -> Self {
        Self {
            http,
            endpoint: settings.normalized_endpoint(),
            api_key: settings.api_key.clone(),
            deployment: settings.deployment.clone(),
            api_version: settings.api_version.clone(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<String>, CompletionError> {
        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&raw) {
                Ok(envelope) => (envelope.error.code, envelope.error.message),
                Err(_) => (None, raw),
            };

            if code.as_deref() == Some(CONTENT_FILTER) {
                return Err(CompletionError::ContentFiltered(message));
            }

            return Err(CompletionError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Deserialization(e.to_string()))?;

        let Some(choice) = body.choices.into_iter().next() else {
            return Ok(None);
        };

        let content = choice.message.and_then(|m| m.content);
        let blank = content.as_deref().map_or(true, str::is_empty);
        if blank && choice.finish_reason.as_deref() == Some(CONTENT_FILTER) {
            return Err(CompletionError::ContentFiltered(
                "completion output was filtered".to_string(),
            ));
        }

        Ok(content)
    }
}

/// Request types for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    #[serde(default)]
    message: String,
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    fn is_configured(&self) -> bool {
        true
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, CompletionError> {
        let request = ChatCompletionRequest {
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let response = self
            .http
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }
}

/// Completion client used when no provider is configured.
///
/// Every call fails with [`CompletionError::NotConfigured`] without any I/O.
pub struct UnconfiguredClient;

#[async_trait]
impl CompletionClient for UnconfiguredClient {
    fn is_configured(&self) -> bool {
        false
    }

    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<Option<String>, CompletionError> {
        Err(CompletionError::NotConfigured)
    }
}
