//! 릴레이 업스트림 포트.
//!
//! 구현: `hostpulse-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;

/// 업스트림 응답: 상태 코드와 본문을 그대로 보존
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// HTTP 상태 코드
    pub status: u16,
    /// 응답 본문 (변형 없음)
    pub body: Vec<u8>,
}

/// 원격 에이전트의 스냅샷 문서를 가져오는 클라이언트
#[async_trait]
pub trait SnapshotUpstream: Send + Sync {
    /// 스냅샷 1회 조회 (재시도 없음)
    async fn fetch_snapshot(&self) -> Result<UpstreamResponse, CoreError>;

    /// 설정된 업스트림 주소
    fn upstream_url(&self) -> &str;
}
