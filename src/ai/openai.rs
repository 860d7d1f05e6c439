use crate::ai::http_client::HttpClient;
use crate::ai::prompt_template::{GenerationRequest, Platform, PromptTemplate};
use crate::ai::response::{parse_response, ResponseShape};
use crate::ai::response_processor::ResponseProcessor;
use crate::ai::{endpoint, require_api_key, AiProvider};
use crate::config::ProviderSettings;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// OpenAI completions API (`/completions`)
pub struct OpenAiProvider {
    settings: ProviderSettings,
    client: Arc<dyn HttpClient>,
    platform: Platform,
}

impl OpenAiProvider {
    pub fn new(settings: ProviderSettings, client: Arc<dyn HttpClient>) -> Self {
        Self {
            settings,
            client,
            platform: Platform::current(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.settings.model,
            "prompt": prompt,
            "max_tokens": 1000,
            "temperature": 0,
            "top_p": 1,
            "presence_penalty": 0,
            "frequency_penalty": 0,
            "stop": "```",
            "suffix": "\n```",
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "OpenAI"
    }

    fn is_config_valid(&self) -> bool {
        self.settings.has_api_key()
    }

    async fn generate_code(&self, prompt: &str) -> Result<String> {
        let api_key = require_api_key(&self.settings, self.name(), "OPENAI_API_KEY")?;

        let request = GenerationRequest::new(prompt, self.platform);
        let full_prompt = PromptTemplate::standard(&request);

        let url = endpoint(&self.settings.api_base, "/completions");
        debug!("POST {} (model: {})", url, self.settings.model);

        let authorization = format!("Bearer {}", api_key);
        let response = self
            .client
            .post_json(
                &url,
                &[("Authorization", authorization.as_str()), ("Content-Type", "application/json")],
                &self.request_body(&full_prompt),
            )
            .await?;

        let text = parse_response(self.name(), ResponseShape::PromptCompletion, &response)?;
        Ok(ResponseProcessor::plain(&text))
    }
}
