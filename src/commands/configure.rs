use crate::config::{Config, ConfigPaths};
use crate::error::Result;
use crate::ui::settings::{ask_settings, SettingsAnswers};
use crate::ui::Formatter;

/// `--config`: 대화형으로 기본 provider와 API key를 설정
pub fn configure_settings(config: &Config, paths: &ConfigPaths) -> Result<()> {
    let answers = ask_settings(config)?;
    let updated = apply_answers(config, &answers);

    match updated.save(paths) {
        Ok(()) => {
            Formatter::show_success("Configuration saved successfully.");
            Ok(())
        }
        Err(e) => {
            Formatter::show_error("Failed to save the configuration.");
            Err(e)
        }
    }
}

/// 입력값을 현재 설정에 병합
///
/// 빈 API key는 기존 값을 지우는 것으로 처리한다.
pub fn apply_answers(config: &Config, answers: &SettingsAnswers) -> Config {
    let mut updated = config.clone();
    updated.default_provider = answers.default_provider.key().to_string();

    let settings = updated.settings_mut(answers.default_provider);
    settings.api_key = if answers.api_key.is_empty() {
        None
    } else {
        Some(answers.api_key.clone())
    };

    updated
}
