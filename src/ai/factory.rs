use crate::ai::anthropic::AnthropicProvider;
use crate::ai::deepseek::DeepSeekProvider;
use crate::ai::gemini::GeminiProvider;
use crate::ai::http_client::{HttpClient, ReqwestHttpClient};
use crate::ai::openai::OpenAiProvider;
use crate::ai::AiProvider;
use crate::config::{Config, DEFAULT_PROVIDER};
use crate::error::{ComandoError, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// 지원되는 provider 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    DeepSeek,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::DeepSeek,
        ProviderKind::Gemini,
    ];

    /// CLI/설정 파일에서 쓰는 키
    pub fn key(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::DeepSeek => "deepseek",
            ProviderKind::Gemini => "gemini",
        }
    }

    pub fn default_api_base(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::Anthropic => "https://api.anthropic.com",
            ProviderKind::DeepSeek => "https://api.deepseek.com",
            ProviderKind::Gemini => "https://generativelanguage.googleapis.com",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-3.5-turbo-instruct",
            ProviderKind::Anthropic => "claude-2",
            ProviderKind::DeepSeek => "deepseek-chat",
            ProviderKind::Gemini => "gemini-2.0-flash",
        }
    }

    /// 설정 화면에 표시할 API key 라벨
    pub fn api_key_label(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI API Key",
            ProviderKind::Anthropic => "Anthropic API Key",
            ProviderKind::DeepSeek => "DeepSeek API Key",
            ProviderKind::Gemini => "Google Gemini API Key",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ComandoError;

    /// 대소문자 구분 없이 파싱
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "deepseek" => Ok(ProviderKind::DeepSeek),
            "gemini" => Ok(ProviderKind::Gemini),
            _ => Err(ComandoError::UnsupportedProvider(s.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Provider factory for creating AI providers based on the provider key
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance based on the provider key
    ///
    /// # Arguments
    /// * `provider_key` - The key of the provider (openai, anthropic, deepseek, gemini)
    /// * `config` - Merged configuration
    ///
    /// # Errors
    /// * Returns `ComandoError::UnsupportedProvider` if the key is unknown
    pub fn create(provider_key: &str, config: &Config) -> Result<Arc<dyn AiProvider>> {
        Self::create_with_client(provider_key, config, Arc::new(ReqwestHttpClient::new()))
    }

    /// HTTP 클라이언트를 주입하여 provider 생성
    pub fn create_with_client(
        provider_key: &str,
        config: &Config,
        client: Arc<dyn HttpClient>,
    ) -> Result<Arc<dyn AiProvider>> {
        let kind: ProviderKind = provider_key.parse()?;
        let settings = config.settings(kind).clone();
        debug!("Using provider: {}", kind);

        let provider: Arc<dyn AiProvider> = match kind {
            ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(settings, client)),
            ProviderKind::Anthropic => Arc::new(AnthropicProvider::new(settings, client)),
            ProviderKind::DeepSeek => Arc::new(DeepSeekProvider::new(settings, client)),
            ProviderKind::Gemini => Arc::new(GeminiProvider::new(settings, client)),
        };

        Ok(provider)
    }

    /// 설정의 default_provider (비어있으면 "gemini")
    pub fn default_provider_key(config: &Config) -> &str {
        if config.default_provider.is_empty() {
            DEFAULT_PROVIDER
        } else {
            &config.default_provider
        }
    }

    /// 설정의 기본 provider 생성
    pub fn default_provider(config: &Config) -> Result<Arc<dyn AiProvider>> {
        Self::create(Self::default_provider_key(config), config)
    }

    /// Get a list of all supported provider keys
    pub fn supported_providers() -> Vec<&'static str> {
        ProviderKind::ALL.iter().map(|kind| kind.key()).collect()
    }

    /// Check if a provider key is supported
    pub fn is_supported(provider_key: &str) -> bool {
        provider_key.parse::<ProviderKind>().is_ok()
    }
}
