/// 안전 지시문: 파괴적이지 않은 bash 코드만 출력하도록 요청
const SAFETY_DIRECTIVE: &str = "Generate ONLY bash code that is SAFE and does NOT cause \
     irreparable damage to the system. Do not include any additional explanations. \
     Only show the bash code that should be executed.";

/// 최소화 지시문 (Gemini 전용)
const MINIMAL_DIRECTIVE: &str = "Keep the bash command minimal, solving it in one line or \
     two at most if possible. Do not include any comments.";

/// 프롬프트에 붙이는 운영체제 힌트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    None,
}

impl Platform {
    /// 현재 호스트 운영체제
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::None,
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Platform::MacOs => " (on macOS)",
            Platform::Linux => " (on Linux)",
            Platform::Windows => " (on Windows)",
            Platform::None => "",
        }
    }
}

/// 명령어 생성 요청. 생성 후에는 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    raw_prompt: String,
    platform: Platform,
}

impl GenerationRequest {
    pub fn new(raw_prompt: impl Into<String>, platform: Platform) -> Self {
        Self {
            raw_prompt: raw_prompt.into(),
            platform,
        }
    }

    pub fn raw_prompt(&self) -> &str {
        &self.raw_prompt
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

/// AI provider용 프롬프트 템플릿 생성기
///
/// 모든 provider가 같은 형식(요청 + 플랫폼 힌트 + 안전 지시문)을 사용하도록
/// 템플릿을 한 곳에서 관리합니다.
pub struct PromptTemplate;

impl PromptTemplate {
    /// `<요청><힌트>. <안전 지시문>[ <추가 규칙>]`
    ///
    /// # Examples
    /// ```
    /// use comando::ai::prompt_template::{GenerationRequest, Platform, PromptTemplate};
    ///
    /// let request = GenerationRequest::new("list files", Platform::Linux);
    /// let prompt = PromptTemplate::build(&request, None);
    /// assert!(prompt.starts_with("list files (on Linux). "));
    /// ```
    pub fn build(request: &GenerationRequest, extra_rules: Option<&str>) -> String {
        let mut prompt = format!(
            "{}{}. {}",
            request.raw_prompt(),
            request.platform().hint(),
            SAFETY_DIRECTIVE
        );

        if let Some(rules) = extra_rules {
            prompt.push(' ');
            prompt.push_str(rules);
        }

        prompt
    }

    /// OpenAI, Anthropic, DeepSeek 공용 프롬프트
    pub fn standard(request: &GenerationRequest) -> String {
        Self::build(request, None)
    }

    /// Gemini용 프롬프트 (한두 줄, 주석 없음)
    pub fn minimal(request: &GenerationRequest) -> String {
        Self::build(request, Some(MINIMAL_DIRECTIVE))
    }
}
