use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// 스피너 스타일 (AI 명령어 생성, 실행 중)
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_draw_target(ProgressDrawTarget::stderr());
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"])
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// 성공 메시지와 함께 스피너 종료
pub fn succeed_spinner(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    eprintln!("{} {}", "✔".green(), message.green());
}

/// 실패 메시지와 함께 스피너 종료
pub fn fail_spinner(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    eprintln!("{} {}", "✖".red(), message.red());
}
