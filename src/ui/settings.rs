use crate::ai::factory::ProviderKind;
use crate::config::Config;
use crate::error::{ComandoError, Result};
use dialoguer::{Input, Select};

/// 설정 화면에서 입력받은 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsAnswers {
    pub default_provider: ProviderKind,
    pub api_key: String,
}

/// 기본 provider와 해당 provider의 API key를 대화형으로 입력받는다
pub fn ask_settings(current: &Config) -> Result<SettingsAnswers> {
    let keys: Vec<&str> = ProviderKind::ALL.iter().map(|kind| kind.key()).collect();
    let selected = ProviderKind::ALL
        .iter()
        .position(|kind| kind.key() == current.default_provider.to_lowercase())
        .unwrap_or(ProviderKind::ALL.len() - 1);

    let index = Select::new()
        .with_prompt("Select the default AI provider")
        .items(&keys)
        .default(selected)
        .interact()
        .map_err(|_| ComandoError::UserCancelled)?;
    let default_provider = ProviderKind::ALL[index];

    let current_key = current
        .settings(default_provider)
        .api_key
        .clone()
        .unwrap_or_default();

    let api_key: String = Input::new()
        .with_prompt(format!("{}:", default_provider.api_key_label()))
        .default(current_key)
        .allow_empty(true)
        .show_default(false)
        .interact_text()
        .map_err(|_| ComandoError::UserCancelled)?;

    Ok(SettingsAnswers {
        default_provider,
        api_key: api_key.trim().to_string(),
    })
}
