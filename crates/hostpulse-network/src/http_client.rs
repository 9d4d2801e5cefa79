//! 업스트림 스냅샷 HTTP 클라이언트.
//!
//! `SnapshotUpstream` 포트 구현. 요청마다 에이전트에 GET 1회, 재시도 없음.
//! 응답 본문은 파싱하지 않고 바이트 그대로 넘긴다.

use async_trait::async_trait;
use hostpulse_core::error::CoreError;
use hostpulse_core::ports::relay::{SnapshotUpstream, UpstreamResponse};
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest 기반 업스트림 클라이언트: `SnapshotUpstream` 포트 구현
pub struct HttpSnapshotUpstream {
    client: reqwest::Client,
    url: String,
}

impl HttpSnapshotUpstream {
    /// 새 업스트림 클라이언트 생성
    ///
    /// `timeout`은 연결부터 본문 수신까지 전체 요청에 적용된다.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, CoreError> {
        if url.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "upstream_url".to_string(),
                message: "빈 URL".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// 응답 상태 코드 확인: 2xx가 아니면 `CoreError::Upstream`
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_else(|e| {
            warn!("업스트림 응답 본문 읽기 실패: {e}");
            String::new()
        });
        let message = if text.is_empty() {
            status.canonical_reason().unwrap_or("unknown").to_string()
        } else {
            text
        };

        Err(CoreError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

/// 전송 계층 에러 메시지: 타임아웃과 연결 실패를 구분
fn transport_error(url: &str, e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        CoreError::Network(format!("{url} 요청 타임아웃: {e}"))
    } else if e.is_connect() {
        CoreError::Network(format!("{url} 연결 실패: {e}"))
    } else {
        CoreError::Network(format!("{url} 요청 실패: {e}"))
    }
}

#[async_trait]
impl SnapshotUpstream for HttpSnapshotUpstream {
    async fn fetch_snapshot(&self) -> Result<UpstreamResponse, CoreError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| transport_error(&self.url, e))?;

        let resp = Self::check_response(resp).await?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| transport_error(&self.url, e))?;

        debug!("업스트림 응답 {status}, {}바이트", body.len());
        Ok(UpstreamResponse {
            status,
            body: body.to_vec(),
        })
    }

    fn upstream_url(&self) -> &str {
        &self.url
    }
}
