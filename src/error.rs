use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComandoError {
    /// API key 등 필수 설정 누락 (네트워크 호출 전에 감지)
    #[error("{0}")]
    Configuration(String),

    #[error("Unsupported AI provider: {0}\nSupported providers: openai, anthropic, deepseek, gemini")]
    UnsupportedProvider(String),

    /// provider HTTP/전송/파싱 실패. 메시지는 그대로 사용자에게 노출된다.
    #[error("{0}")]
    Upstream(String),

    #[error("The generated command exited with code {code}")]
    Subprocess { code: i32, stderr: String },

    #[error("Command execution failed: {0}")]
    ExecutionError(String),

    #[error("User cancelled")]
    UserCancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ComandoError {
    /// 프로세스 종료 코드
    ///
    /// 하위 프로세스 실패는 가능한 한 자식의 종료 코드를 그대로 전달한다.
    pub fn exit_code(&self) -> i32 {
        match self {
            ComandoError::Subprocess { code, .. } if (1..=255).contains(code) => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComandoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subprocess_exit_code_is_forwarded() {
        let err = ComandoError::Subprocess { code: 3, stderr: String::new() };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_signal_killed_subprocess_maps_to_one() {
        let err = ComandoError::Subprocess { code: -1, stderr: String::new() };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unsupported_provider_names_key() {
        let err = ComandoError::UnsupportedProvider("mistral".to_string());
        assert!(err.to_string().contains("mistral"));
        assert_eq!(err.exit_code(), 1);
    }
}
