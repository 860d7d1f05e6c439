use once_cell::sync::Lazy;
use regex::Regex;

/// 사전 컴파일된 정규표현식 (성능 최적화)
static BASH_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```bash\n(.*?)```").expect("valid bash block regex")
});

/// provider 응답 텍스트에서 실행할 코드를 추출하는 공통 모듈
pub struct ResponseProcessor;

impl ResponseProcessor {
    /// 응답 앞뒤 공백 제거
    pub fn plain(raw: &str) -> String {
        raw.trim().to_string()
    }

    /// 자유 형식 텍스트에서 첫 번째 ```bash 블록을 추출
    ///
    /// 블록이 없으면 전체 텍스트를 trim하여 반환합니다.
    ///
    /// # Examples
    /// ```
    /// use comando::ai::response_processor::ResponseProcessor;
    ///
    /// let code = ResponseProcessor::extract_bash_block("Run:\n```bash\nls -la\n```\nDone.");
    /// assert_eq!(code, "ls -la");
    /// ```
    pub fn extract_bash_block(raw: &str) -> String {
        match BASH_BLOCK_REGEX.captures(raw).and_then(|caps| caps.get(1)) {
            Some(block) => block.as_str().trim().to_string(),
            None => Self::plain(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_trims() {
        assert_eq!(ResponseProcessor::plain("  ls -la \n"), "ls -la");
    }

    #[test]
    fn test_fenced_block_inside_prose() {
        let raw = "Sure, here you go:\n```bash\necho hi\n```\nThis prints hi.";
        assert_eq!(ResponseProcessor::extract_bash_block(raw), "echo hi");
    }

    #[test]
    fn test_no_fence_returns_trimmed_text() {
        let raw = "\n  du -sh * | sort -h  \n";
        assert_eq!(ResponseProcessor::extract_bash_block(raw), "du -sh * | sort -h");
    }

    #[test]
    fn test_multiline_block() {
        let raw = "```bash\ncd /tmp\nls\n```";
        assert_eq!(ResponseProcessor::extract_bash_block(raw), "cd /tmp\nls");
    }

    #[test]
    fn test_first_block_wins() {
        let raw = "```bash\nfirst\n```\n```bash\nsecond\n```";
        assert_eq!(ResponseProcessor::extract_bash_block(raw), "first");
    }

    #[test]
    fn test_non_bash_fence_is_not_extracted() {
        let raw = "```python\nprint(1)\n```";
        assert_eq!(ResponseProcessor::extract_bash_block(raw), raw);
    }
}
