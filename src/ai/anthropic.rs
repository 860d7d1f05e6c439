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

/// Anthropic text completions API (`/v1/complete`)
pub struct AnthropicProvider {
    settings: ProviderSettings,
    client: Arc<dyn HttpClient>,
    platform: Platform,
}

impl AnthropicProvider {
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
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "Anthropic Claude"
    }

    fn is_config_valid(&self) -> bool {
        self.settings.has_api_key()
    }

    async fn generate_code(&self, prompt: &str) -> Result<String> {
        let api_key = require_api_key(&self.settings, self.name(), "ANTHROPIC_API_KEY")?;

        let request = GenerationRequest::new(prompt, self.platform);
        let body = json!({
            "model": self.settings.model,
            "prompt": PromptTemplate::standard(&request),
            "max_tokens_to_sample": 1000,
            "stop_sequences": ["```"],
        });

        let url = endpoint(&self.settings.api_base, "/v1/complete");
        debug!("POST {} (model: {})", url, self.settings.model);

        let response = self
            .client
            .post_json(
                &url,
                &[("x-api-key", api_key), ("Content-Type", "application/json")],
                &body,
            )
            .await?;

        let text = parse_response(self.name(), ResponseShape::PromptCompletion, &response)?;
        Ok(ResponseProcessor::plain(&text))
    }
}
