//! provider API 호출용 HTTP 클라이언트 추상화
//!
//! adapter는 `HttpClient` trait에만 의존하므로 테스트에서는 네트워크 없이
//! 미리 준비된 응답을 돌려주는 mock을 주입할 수 있습니다.

use crate::error::{ComandoError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP 응답 (상태 코드 + 본문 텍스트)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// JSON 본문으로 POST 요청을 보내고 상태 코드와 본문을 반환
    ///
    /// 2xx가 아닌 응답도 `Ok`로 돌려준다. 전송 실패만 `Upstream` 에러가 된다.
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse>;
}

/// reqwest 기반 기본 구현
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| ComandoError::Upstream(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ComandoError::Upstream(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 요청을 기록하고 고정된 응답(또는 전송 실패)을 돌려주는 mock
    pub struct MockHttpClient {
        response: std::result::Result<HttpResponse, String>,
        pub requests: Mutex<Vec<RecordedRequest>>,
    }

    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: serde_json::Value,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    impl MockHttpClient {
        pub fn new(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse::new(status, body)),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// 전송 단계에서 실패하는 클라이언트
        pub fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn last_request(&self) -> RecordedRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request recorded")
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn post_json(
            &self,
            url: &str,
            headers: &[(&str, &str)],
            body: &serde_json::Value,
        ) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                body: body.clone(),
            });
            self.response.clone().map_err(ComandoError::Upstream)
        }
    }

    #[test]
    fn test_http_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockHttpClient::new(200, "{}");
        let response = client
            .post_json("http://example.test", &[("x-api-key", "k")], &serde_json::json!({"a": 1}))
            .await
            .unwrap();

        assert_eq!(response.body, "{}");
        assert_eq!(client.request_count(), 1);
        assert_eq!(client.last_request().header("X-API-KEY"), Some("k"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_upstream_error() {
        let client = ReqwestHttpClient::new();
        let result = client
            .post_json("http://127.0.0.1:1/x", &[], &serde_json::json!({}))
            .await;

        match result {
            Err(ComandoError::Upstream(message)) => assert!(!message.is_empty()),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
