use crate::ai::http_client::HttpClient;
use crate::ai::prompt_template::{GenerationRequest, Platform, PromptTemplate};
use crate::ai::response::{parse_response, ResponseShape};
use crate::ai::response_processor::ResponseProcessor;
use crate::ai::{endpoint, require_api_key, AiProvider};
use crate::config::ProviderSettings;
use crate::error::{ComandoError, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Google Gemini generateContent API
///
/// API key는 헤더가 아니라 URL 쿼리(`?key=`)로 전달한다.
/// 응답이 자유 형식이라 ```bash 블록을 찾아서 추출한다.
pub struct GeminiProvider {
    settings: ProviderSettings,
    client: Arc<dyn HttpClient>,
    platform: Platform,
}

impl GeminiProvider {
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

    fn model_path(&self) -> String {
        format!("/v1beta/models/{}:generateContent", self.settings.model)
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Google Gemini"
    }

    fn is_config_valid(&self) -> bool {
        self.settings.has_api_key()
    }

    async fn generate_code(&self, prompt: &str) -> Result<String> {
        let api_key = require_api_key(&self.settings, self.name(), "GEMINI_API_KEY")?;

        // 공통 프롬프트 템플릿 사용 (Gemini 전용 최소화 규칙 포함)
        let request = GenerationRequest::new(prompt, self.platform);
        let body = json!({
            "contents": [{
                "parts": [{ "text": PromptTemplate::minimal(&request) }]
            }]
        });

        let url = endpoint(&self.settings.api_base, &self.model_path());
        // key가 로그에 남지 않도록 쿼리 추가 전에 기록
        debug!("POST {}", url);

        let url = Url::parse_with_params(&url, &[("key", api_key)]).map_err(|e| {
            ComandoError::Configuration(format!("Invalid API base URL {}: {}", url, e))
        })?;

        let response = self
            .client
            .post_json(url.as_str(), &[("Content-Type", "application/json")], &body)
            .await?;

        let text = parse_response(self.name(), ResponseShape::ContentParts, &response)?;
        Ok(ResponseProcessor::extract_bash_block(&text))
    }
}
