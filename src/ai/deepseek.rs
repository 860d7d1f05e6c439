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

const SYSTEM_MESSAGE: &str = "You are an assistant that generates precise, working shell scripts.";

/// DeepSeek chat completions API (OpenAI 호환 `/chat/completions`)
pub struct DeepSeekProvider {
    settings: ProviderSettings,
    client: Arc<dyn HttpClient>,
    platform: Platform,
}

impl DeepSeekProvider {
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
impl AiProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    fn is_config_valid(&self) -> bool {
        self.settings.has_api_key()
    }

    async fn generate_code(&self, prompt: &str) -> Result<String> {
        let api_key = require_api_key(&self.settings, self.name(), "DEEPSEEK_API_KEY")?;

        let request = GenerationRequest::new(prompt, self.platform);
        let body = json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": SYSTEM_MESSAGE },
                { "role": "user", "content": PromptTemplate::standard(&request) },
            ],
        });

        let url = endpoint(&self.settings.api_base, "/chat/completions");
        debug!("POST {} (model: {})", url, self.settings.model);

        let authorization = format!("Bearer {}", api_key);
        let response = self
            .client
            .post_json(
                &url,
                &[("Authorization", authorization.as_str()), ("Content-Type", "application/json")],
                &body,
            )
            .await?;

        let text = parse_response(self.name(), ResponseShape::ChatCompletion, &response)?;
        Ok(ResponseProcessor::plain(&text))
    }
}
