use crate::ai::factory::ProviderKind;
use crate::error::{ComandoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// provider 키가 지정되지 않았을 때 사용하는 기본 provider
pub const DEFAULT_PROVIDER: &str = "gemini";

/// 사용자 디렉토리를 덮어쓰는 환경 변수 (테스트/샌드박스용)
pub const HOME_ENV: &str = "COMANDO_HOME";

/// comando 사용자 디렉토리 안의 파일 경로들
///
/// 기본 위치는 ~/.comando 이며 설정 파일과 히스토리 파일이 함께 저장됩니다.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    dir: PathBuf,
}

impl ConfigPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// COMANDO_HOME 또는 ~/.comando
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var(HOME_ENV).ok().filter(|v| !v.is_empty()) {
            return Ok(Self::new(dir));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            ComandoError::Configuration("Could not determine the home directory".to_string())
        })?;
        Ok(Self::new(home.join(".comando")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.join("config.json")
    }

    pub fn history_file(&self) -> PathBuf {
        self.dir.join("history")
    }
}

/// 하나의 provider에 대한 병합된 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl ProviderSettings {
    /// API key가 비어있지 않으면 유효한 설정
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }
}

/// 디스크에 저장되는 설정 파일 형식 (~/.comando/config.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<String>,

    // OpenAI는 접두사 없는 키를 사용한다
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic_api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepseek_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepseek_api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepseek_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_model: Option<String>,
}

impl StoredConfig {
    /// 설정 파일 읽기. 파일이 없거나 깨져있으면 빈 설정을 반환한다.
    pub fn read(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read config file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to parse config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// comando 사용자 설정
///
/// 필드마다 독립적으로 환경 변수 > 설정 파일 > 기본값 순서로 병합됩니다.
/// 프로세스 시작 시 한 번 로드하고 참조로 전달합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 기본 AI provider (openai, anthropic, deepseek, gemini)
    pub default_provider: String,

    /// 사용자 셸 경로 ($SHELL). 셸 히스토리 기록 대상 결정에 사용
    pub shell: String,

    pub openai: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub deepseek: ProviderSettings,
    pub gemini: ProviderSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self::merge(&StoredConfig::default(), |_| None)
    }
}

impl Config {
    /// 설정 파일과 프로세스 환경 변수로부터 로드
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        Ok(Self::load_with_env(paths, |key| std::env::var(key).ok()))
    }

    /// 환경 변수 조회 함수를 주입하여 로드
    pub fn load_with_env<F>(paths: &ConfigPaths, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let stored = StoredConfig::read(&paths.config_file());
        Self::merge(&stored, env)
    }

    /// 환경 변수 > 저장된 값 > 기본값 병합
    pub fn merge<F>(stored: &StoredConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.is_empty());

        Self {
            default_provider: pick(
                env("AI_PROVIDER"),
                stored.default_provider.as_ref(),
                DEFAULT_PROVIDER,
            ),
            shell: env("SHELL").unwrap_or_default(),
            openai: settings(
                &env,
                "OPENAI",
                [&stored.api_key, &stored.api_base, &stored.model],
                ProviderKind::OpenAi,
            ),
            anthropic: settings(
                &env,
                "ANTHROPIC",
                [&stored.anthropic_api_key, &stored.anthropic_api_base, &stored.anthropic_model],
                ProviderKind::Anthropic,
            ),
            deepseek: settings(
                &env,
                "DEEPSEEK",
                [&stored.deepseek_api_key, &stored.deepseek_api_base, &stored.deepseek_model],
                ProviderKind::DeepSeek,
            ),
            gemini: settings(
                &env,
                "GEMINI",
                [&stored.gemini_api_key, &stored.gemini_api_base, &stored.gemini_model],
                ProviderKind::Gemini,
            ),
        }
    }

    pub fn settings(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::DeepSeek => &self.deepseek,
            ProviderKind::Gemini => &self.gemini,
        }
    }

    pub fn settings_mut(&mut self, kind: ProviderKind) -> &mut ProviderSettings {
        match kind {
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::Anthropic => &mut self.anthropic,
            ProviderKind::DeepSeek => &mut self.deepseek,
            ProviderKind::Gemini => &mut self.gemini,
        }
    }

    /// 저장할 키만 추려서 파일 형식으로 변환
    pub fn to_stored(&self) -> StoredConfig {
        StoredConfig {
            default_provider: Some(self.default_provider.clone()),
            api_key: self.openai.api_key.clone(),
            api_base: Some(self.openai.api_base.clone()),
            model: Some(self.openai.model.clone()),
            anthropic_api_key: self.anthropic.api_key.clone(),
            anthropic_api_base: Some(self.anthropic.api_base.clone()),
            anthropic_model: Some(self.anthropic.model.clone()),
            deepseek_api_key: self.deepseek.api_key.clone(),
            deepseek_api_base: Some(self.deepseek.api_base.clone()),
            deepseek_model: Some(self.deepseek.model.clone()),
            gemini_api_key: self.gemini.api_key.clone(),
            gemini_api_base: Some(self.gemini.api_base.clone()),
            gemini_model: Some(self.gemini.model.clone()),
        }
    }

    /// 설정을 파일에 저장
    pub fn save(&self, paths: &ConfigPaths) -> Result<()> {
        // 디렉토리가 없으면 생성
        fs::create_dir_all(paths.dir())?;

        let json = serde_json::to_string_pretty(&self.to_stored())?;
        fs::write(paths.config_file(), json)?;

        debug!("Saved config to {}", paths.config_file().display());
        Ok(())
    }
}

fn pick(env: Option<String>, stored: Option<&String>, default: &str) -> String {
    env.or_else(|| stored.filter(|v| !v.is_empty()).cloned())
        .unwrap_or_else(|| default.to_string())
}

/// `<PREFIX>_API_KEY`, `<PREFIX>_API_BASE`, `<PREFIX>_MODEL` 순서로 병합
fn settings<F>(
    env: &F,
    prefix: &str,
    [key, base, model]: [&Option<String>; 3],
    kind: ProviderKind,
) -> ProviderSettings
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = env(&format!("{}_API_KEY", prefix))
        .or_else(|| key.as_ref().filter(|v| !v.is_empty()).cloned());

    ProviderSettings {
        api_key,
        api_base: pick(env(&format!("{}_API_BASE", prefix)), base.as_ref(), kind.default_api_base()),
        model: pick(env(&format!("{}_MODEL", prefix)), model.as_ref(), kind.default_model()),
    }
}
