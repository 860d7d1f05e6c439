//! vendor별 응답 형태 파싱
//!
//! provider마다 생성된 텍스트가 들어있는 위치가 다르므로 응답 형태를
//! `ResponseShape`로 구분하고 형태별로 타입이 있는 파서를 둡니다.

use crate::ai::http_client::HttpResponse;
use crate::error::{ComandoError, Result};
use serde::Deserialize;

/// provider 응답 본문의 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// 프롬프트 완성형: `choices[0].text` 또는 최상위 `completion`
    PromptCompletion,
    /// 채팅 완성형: `choices[0].message.content`
    ChatCompletion,
    /// content parts 배열: `candidates[0].content.parts[0].text`
    ContentParts,
}

#[derive(Debug, Deserialize)]
struct PromptCompletionBody {
    #[serde(default)]
    choices: Vec<TextChoice>,
    completion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextChoice {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentPartsBody {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl ResponseShape {
    /// 2xx 응답 본문에서 생성된 텍스트를 꺼낸다. 실패 시 사유 문자열 반환
    pub fn extract(&self, body: &str) -> std::result::Result<String, String> {
        match self {
            ResponseShape::PromptCompletion => {
                let parsed: PromptCompletionBody =
                    serde_json::from_str(body).map_err(|e| e.to_string())?;
                parsed
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.text)
                    .or(parsed.completion)
                    .ok_or_else(|| "missing completion text".to_string())
            }
            ResponseShape::ChatCompletion => {
                let parsed: ChatCompletionBody =
                    serde_json::from_str(body).map_err(|e| e.to_string())?;
                parsed
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message)
                    .and_then(|message| message.content)
                    .ok_or_else(|| "missing choices[0].message.content".to_string())
            }
            ResponseShape::ContentParts => {
                let parsed: ContentPartsBody =
                    serde_json::from_str(body).map_err(|e| e.to_string())?;
                parsed
                    .candidates
                    .into_iter()
                    .next()
                    .and_then(|candidate| candidate.content)
                    .and_then(|content| content.parts.into_iter().next())
                    .and_then(|part| part.text)
                    .ok_or_else(|| "missing candidates[0].content.parts[0].text".to_string())
            }
        }
    }
}

/// HTTP 응답을 검사하고 생성된 텍스트를 반환
///
/// 2xx가 아니면 vendor 에러 메시지를, 형태가 맞지 않으면 파싱 사유를
/// `Upstream` 에러로 돌려줍니다.
pub fn parse_response(provider: &str, shape: ResponseShape, response: &HttpResponse) -> Result<String> {
    if !response.is_success() {
        return Err(ComandoError::Upstream(error_message(response)));
    }

    shape.extract(&response.body).map_err(|reason| {
        ComandoError::Upstream(format!("Unexpected response from {}: {}", provider, reason))
    })
}

/// 실패 응답에서 사람이 읽을 수 있는 메시지를 고른다
///
/// `error.message` > `error`(문자열) > `message` > HTTP 상태 코드 순서
pub fn error_message(response: &HttpResponse) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&response.body) {
        let candidates = [
            value.pointer("/error/message"),
            value.get("error"),
            value.get("message"),
        ];

        if let Some(message) = candidates
            .into_iter()
            .flatten()
            .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
        {
            return message.to_string();
        }
    }

    match reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|status| status.canonical_reason())
    {
        Some(reason) => format!("HTTP {} {}", response.status, reason),
        None => format!("HTTP {}", response.status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_completion_choices() {
        let body = r#"{"choices":[{"text":"\nls -S\n"}]}"#;
        assert_eq!(ResponseShape::PromptCompletion.extract(body).unwrap(), "\nls -S\n");
    }

    #[test]
    fn test_prompt_completion_top_level() {
        let body = r#"{"completion":" df -h","stop_reason":"stop_sequence"}"#;
        assert_eq!(ResponseShape::PromptCompletion.extract(body).unwrap(), " df -h");
    }

    #[test]
    fn test_chat_completion() {
        let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"uptime"}}]}"#;
        assert_eq!(ResponseShape::ChatCompletion.extract(body).unwrap(), "uptime");
    }

    #[test]
    fn test_content_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"whoami"}],"role":"model"}}]}"#;
        assert_eq!(ResponseShape::ContentParts.extract(body).unwrap(), "whoami");
    }

    #[test]
    fn test_missing_fields_are_reported() {
        assert!(ResponseShape::ChatCompletion.extract(r#"{"choices":[]}"#).is_err());
        assert!(ResponseShape::ContentParts.extract(r#"{"candidates":[{}]}"#).is_err());
        assert!(ResponseShape::PromptCompletion.extract("not json").is_err());
    }

    #[test]
    fn test_error_message_prefers_vendor_message() {
        let response = HttpResponse::new(401, r#"{"error":{"message":"bad key"}}"#);
        assert_eq!(error_message(&response), "bad key");
    }

    #[test]
    fn test_error_message_string_error() {
        let response = HttpResponse::new(400, r#"{"error":"invalid model"}"#);
        assert_eq!(error_message(&response), "invalid model");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        let response = HttpResponse::new(502, "<html>Bad Gateway</html>");
        assert_eq!(error_message(&response), "HTTP 502 Bad Gateway");
    }

    #[test]
    fn test_parse_response_non_success() {
        let response = HttpResponse::new(403, r#"{"error":{"message":"bad key"}}"#);
        let err = parse_response("OpenAI", ResponseShape::PromptCompletion, &response).unwrap_err();
        match err {
            ComandoError::Upstream(message) => assert_eq!(message, "bad key"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_response_malformed_body() {
        let response = HttpResponse::new(200, r#"{"unexpected":true}"#);
        let err = parse_response("DeepSeek", ResponseShape::ChatCompletion, &response).unwrap_err();
        assert!(err.to_string().contains("Unexpected response from DeepSeek"));
    }
}
