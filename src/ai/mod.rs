pub mod anthropic;
pub mod deepseek;
pub mod factory;
pub mod gemini;
pub mod http_client;
pub mod openai;
pub mod prompt_template;
pub mod response;
pub mod response_processor;

use crate::config::ProviderSettings;
use crate::error::{ComandoError, Result};
use async_trait::async_trait;

/// AI provider trait. backend마다 독립적으로 구현한다.
///
/// 설정은 생성 시 주입되며 adapter 수명 동안 변경되지 않습니다.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// 표시용 provider 이름 (e.g., "OpenAI", "Google Gemini")
    fn name(&self) -> &str;

    /// 필수 자격 증명(API key)이 있는지 확인
    fn is_config_valid(&self) -> bool;

    /// 자연어 프롬프트로 bash 코드 생성 (HTTP 요청 1회)
    async fn generate_code(&self, prompt: &str) -> Result<String>;
}

/// API key를 꺼내거나, 없으면 네트워크 호출 전에 `Configuration` 에러
pub(crate) fn require_api_key<'a>(
    settings: &'a ProviderSettings,
    provider: &str,
    env_var: &str,
) -> Result<&'a str> {
    settings
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            ComandoError::Configuration(format!(
                "{} API key is not configured.\n\
                 Run 'comando --config' or set the {} environment variable.",
                provider, env_var
            ))
        })
}

/// 끝의 '/'를 제거한 base URL에 경로를 붙인다
pub(crate) fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(endpoint("https://api.openai.com/v1/", "/completions"), "https://api.openai.com/v1/completions");
        assert_eq!(endpoint("http://localhost:8080", "/v1/complete"), "http://localhost:8080/v1/complete");
    }

    #[test]
    fn test_require_api_key_missing() {
        let settings = ProviderSettings {
            api_key: Some(String::new()),
            api_base: "http://localhost".to_string(),
            model: "m".to_string(),
        };

        let err = require_api_key(&settings, "OpenAI", "OPENAI_API_KEY").unwrap_err();
        assert!(matches!(err, ComandoError::Configuration(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
