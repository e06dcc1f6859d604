use reqwest::Client;
use serde_json::Value;

use crate::{
    assistant::model::{GenerateContentRequest, Generation},
    error::AppError,
    models::{is_truthy, value_as_text},
};

const FALLBACK_ERROR_MESSAGE: &str = "Gemini API error";
const EMPTY_REPLY_MESSAGE: &str = "No response generated";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub model: String,
    pub api_key: String,
}

#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    config: GeminiConfig,
}

impl AssistantService {
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// generateContent endpoint, without the credential.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.config.api_url, self.config.model)
    }

    /// Sends the prompt upstream and unwraps the first candidate reply.
    pub async fn generate(&self, prompt: &str) -> Result<Generation, AppError> {
        let request = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let data = response.json::<Value>().await?;

        if !status.is_success() {
            return Err(AppError::UpstreamError(upstream_error_message(&data)));
        }

        Ok(unwrap_generation(data))
    }
}

fn upstream_error_message(data: &Value) -> String {
    data.pointer("/error/message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}

fn unwrap_generation(mut data: Value) -> Generation {
    let message = data
        .pointer("/candidates/0/content/parts/0/text")
        .filter(|text| is_truthy(text))
        .map(value_as_text)
        .unwrap_or_else(|| EMPTY_REPLY_MESSAGE.to_string());

    let usage = data.get_mut("usageMetadata").map(Value::take);

    Generation { message, usage }
}
