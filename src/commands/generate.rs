use crate::ai::AiProvider;
use crate::error::{ComandoError, Result};
use crate::executor::runner::{CommandRunner, ExecutionOutcome};
use crate::history::HistoryStore;
use crate::ui::{create_spinner, fail_spinner, succeed_spinner, Confirmation, ConfirmPrompt, Formatter};
use std::sync::Arc;
use tracing::info;

/// 파이프라인 한 번의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// 실행했고 종료 코드 0
    Executed(ExecutionOutcome),
    /// 운영자가 실행을 거절
    Declined,
}

/// 자연어 요청 하나를 생성 → 확인 → 기록 → 실행까지 처리
pub struct GeneratePipeline {
    provider: Arc<dyn AiProvider>,
    history: HistoryStore,
    confirmation: Box<dyn Confirmation>,
    runner: CommandRunner,
    force: bool,
}

impl GeneratePipeline {
    pub fn new(provider: Arc<dyn AiProvider>, history: HistoryStore) -> Self {
        Self {
            provider,
            history,
            confirmation: Box::new(ConfirmPrompt::new()),
            runner: CommandRunner::new(),
            force: false,
        }
    }

    /// 확인 없이 바로 실행
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_confirmation(mut self, confirmation: Box<dyn Confirmation>) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub async fn run(&self, prompt: &str) -> Result<PipelineOutcome> {
        let name = self.provider.name().to_string();

        // 1. 자격 증명 확인 (네트워크 호출 전)
        if !self.provider.is_config_valid() {
            return Err(ComandoError::Configuration(format!(
                "The provider {} requires an API key. Configure it with 'comando --config'.",
                name
            )));
        }

        // 2. 코드 생성
        let spinner = create_spinner(&format!("Generating command with {}...", name));
        let code = match self.provider.generate_code(prompt).await {
            Ok(code) => {
                succeed_spinner(&spinner, &format!("Code generated with {}!", name));
                code
            }
            Err(e) => {
                // 에러 메시지는 main에서 한 번만 출력
                fail_spinner(&spinner, &format!("Failed to generate the command with {}", name));
                return Err(e);
            }
        };

        // 3. 미리보기
        Formatter::highlight_code(&code);

        // 4. 실행 확인
        if !self.force && !self.confirmation.confirm(&code)? {
            info!("Execution declined by operator");
            return Ok(PipelineOutcome::Declined);
        }

        // 5. 히스토리 기록 후 실행
        self.history.append(&code);
        let outcome = self.execute(&code).await?;

        Ok(PipelineOutcome::Executed(outcome))
    }

    async fn execute(&self, code: &str) -> Result<ExecutionOutcome> {
        let spinner = create_spinner("Running...");
        let outcome = match self.runner.execute(code).await {
            Ok(outcome) => outcome,
            Err(e) => {
                fail_spinner(&spinner, "Failed to start the command");
                return Err(e);
            }
        };

        // 6. 결과 출력
        if outcome.success() {
            succeed_spinner(&spinner, "Command executed successfully");
            if !outcome.stdout.is_empty() {
                println!("{}", outcome.stdout.trim_end_matches('\n'));
            }
            Ok(outcome)
        } else {
            fail_spinner(&spinner, "The program reported an error.");
            if !outcome.stderr.is_empty() {
                eprintln!("{}", outcome.stderr.trim_end_matches('\n'));
            }
            Err(ComandoError::Subprocess {
                code: outcome.exit_code,
                stderr: outcome.stderr,
            })
        }
    }
}
