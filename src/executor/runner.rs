use crate::error::{ComandoError, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// 하위 프로세스 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// 시그널로 종료된 경우 -1
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// 생성된 코드를 `bash -c`로 실행
///
/// stdin은 터미널을 그대로 상속하고 stdout/stderr는 각각 메모리에 수집한다.
pub struct CommandRunner {
    shell: String,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            shell: "bash".to_string(),
        }
    }

    pub async fn execute(&self, code: &str) -> Result<ExecutionOutcome> {
        debug!("Running generated code with {} -c", self.shell);

        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(code)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ComandoError::ExecutionError(format!("failed to start {}: {}", self.shell, e)))?;

        let output = child.wait_with_output().await?;

        let outcome = ExecutionOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        debug!("Generated code exited with {}", outcome.exit_code);

        Ok(outcome)
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
