use crate::error::{ComandoError, Result};
use colored::*;
use dialoguer::Confirm;

/// 생성된 코드 실행 여부를 운영자에게 묻는 인터페이스
pub trait Confirmation: Send + Sync {
    fn confirm(&self, code: &str) -> Result<bool>;
}

/// dialoguer 기반 대화형 확인 (기본값: 예)
pub struct ConfirmPrompt;

impl ConfirmPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmation for ConfirmPrompt {
    fn confirm(&self, _code: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(">> Run the generated program?".dimmed().to_string())
            .default(true)
            .interact()
            .map_err(|_| ComandoError::UserCancelled)
    }
}

/// 항상 같은 답을 돌려주는 확인 (비대화형 실행/테스트용)
pub struct FixedAnswer(pub bool);

impl Confirmation for FixedAnswer {
    fn confirm(&self, _code: &str) -> Result<bool> {
        Ok(self.0)
    }
}
