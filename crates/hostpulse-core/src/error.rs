//! hostpulse 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 자체 에러 타입에서 `CoreError`를 래핑한다.
//! 스냅샷 집계 실패는 [`AggregationError`]로 분리되어, 어떤 소스가
//! 실패했는지와 원인 에러를 함께 보존한다.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 코어 레이어 에러.
/// 텔레메트리 소스, 직렬화, 설정, 네트워크, 저장소 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패: {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 텔레메트리 소스 조회 실패 (OS 인터페이스 오류 등)
    #[error("텔레메트리 소스 에러: {0}")]
    Source(String),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 업스트림이 성공이 아닌 상태 코드로 응답
    #[error("업스트림 응답 실패 ({status}): {message}")]
    Upstream {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문 또는 사유
        message: String,
    },

    /// 저장소 에러 (SQLite 등)
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}

/// 텔레메트리 소스 종류
///
/// 집계 에러에서 실패한 소스를 식별하는 데 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    /// CPU 부하
    CurrentLoad,
    /// 메모리
    MemoryInfo,
    /// 시스템 시간 (uptime)
    SystemTime,
    /// 디스크 레이아웃
    DiskLayout,
    /// 프로세스 목록
    ProcessList,
    /// 네트워크 처리량 통계
    NetworkStats,
    /// 네트워크 인터페이스 설정
    NetworkInterfaces,
    /// 지연 시간 프로브 (선택 소스)
    PingLatency,
}

impl SourceKind {
    /// 와이어/로그에 쓰이는 소스 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::CurrentLoad => "currentLoad",
            SourceKind::MemoryInfo => "memoryInfo",
            SourceKind::SystemTime => "systemTime",
            SourceKind::DiskLayout => "diskLayout",
            SourceKind::ProcessList => "processList",
            SourceKind::NetworkStats => "networkStats",
            SourceKind::NetworkInterfaces => "networkInterfaces",
            SourceKind::PingLatency => "pingLatency",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 스냅샷 집계 에러.
///
/// 필수 소스 하나라도 실패하면 스냅샷 전체가 실패한다.
/// 원인 `CoreError`는 `source()` 체인으로 보존된다.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// 필수 소스 조회 실패
    #[error("필수 소스 {kind} 조회 실패: {cause}")]
    SourceFailed {
        /// 실패한 소스
        kind: SourceKind,
        /// 원인 에러
        #[source]
        cause: CoreError,
    },

    /// 필수 소스 타임아웃
    #[error("필수 소스 {kind} 타임아웃: {timeout_ms}ms 초과")]
    SourceTimeout {
        /// 타임아웃된 소스
        kind: SourceKind,
        /// 초과된 타임아웃 (밀리초)
        timeout_ms: u64,
    },
}

impl AggregationError {
    /// 실패한 소스 종류
    pub fn kind(&self) -> SourceKind {
        match self {
            AggregationError::SourceFailed { kind, .. } => *kind,
            AggregationError::SourceTimeout { kind, .. } => *kind,
        }
    }
}
