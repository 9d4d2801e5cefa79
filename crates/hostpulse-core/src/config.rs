//! 애플리케이션 설정 구조체.
//!
//! 에이전트/릴레이 서버 주소, 텔레메트리 수집 타임아웃, 저장소 경로 등
//! 런타임 설정을 정의한다. [`crate::config_manager::ConfigManager`]를 통해
//! JSON 파일에서 로드하고, CLI 인자로 덮어쓴다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 에이전트 서버 설정 (스냅샷 엔드포인트)
    #[serde(default = "default_agent_server")]
    pub agent: ServerConfig,
    /// 릴레이 설정
    #[serde(default)]
    pub relay: RelayConfig,
    /// 텔레메트리 수집 설정
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// 레코드 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
}

// ============================================================
// 서버 설정
// ============================================================

/// HTTP 서버 바인드 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 서버 포트
    pub port: u16,
    /// 외부 접근 허용 여부 (false: 127.0.0.1 only)
    #[serde(default)]
    pub allow_external: bool,
}

impl ServerConfig {
    /// 바인드할 호스트 주소
    pub fn host(&self) -> &'static str {
        if self.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}

// ============================================================
// 릴레이 설정
// ============================================================

/// 릴레이 설정: 원격 에이전트의 스냅샷을 가져와 그대로 전달
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// 릴레이 서버 바인드 설정
    #[serde(default = "default_relay_server")]
    pub server: ServerConfig,
    /// 업스트림 스냅샷 URL
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// 업스트림 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// 레코드 저장 API 활성화
    #[serde(default = "default_true")]
    pub records_enabled: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            server: default_relay_server(),
            upstream_url: default_upstream_url(),
            request_timeout_ms: default_request_timeout_ms(),
            records_enabled: true,
        }
    }
}

// ============================================================
// 텔레메트리 수집 설정
// ============================================================

/// 텔레메트리 수집 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// 필수 소스별 타임아웃 (밀리초)
    #[serde(default = "default_source_timeout_ms")]
    pub source_timeout_ms: u64,
    /// 지연 시간 프로브 타임아웃 (밀리초)
    #[serde(default = "default_latency_timeout_ms")]
    pub latency_timeout_ms: u64,
    /// 속도 계산용 샘플 간격 (밀리초). CPU/네트워크/프로세스 부하에 사용
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
    /// 지연 시간 측정 대상 호스트
    #[serde(default = "default_latency_host")]
    pub latency_host: String,
    /// 지연 시간 측정 대상 포트 (TCP)
    #[serde(default = "default_latency_port")]
    pub latency_port: u16,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            source_timeout_ms: default_source_timeout_ms(),
            latency_timeout_ms: default_latency_timeout_ms(),
            sample_interval_ms: default_sample_interval_ms(),
            latency_host: default_latency_host(),
            latency_port: default_latency_port(),
        }
    }
}

impl MonitorConfig {
    /// 필수 소스 타임아웃
    pub fn source_timeout(&self) -> Duration {
        Duration::from_millis(self.source_timeout_ms)
    }

    /// 지연 시간 프로브 타임아웃
    pub fn latency_timeout(&self) -> Duration {
        Duration::from_millis(self.latency_timeout_ms)
    }

    /// 샘플 간격
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }
}

// ============================================================
// 저장소 설정
// ============================================================

/// 레코드 저장소 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite 파일 경로 (None: 플랫폼 기본 데이터 디렉토리)
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            agent: default_agent_server(),
            relay: RelayConfig::default(),
            monitor: MonitorConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    /// 릴레이 업스트림 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.relay.request_timeout_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_true() -> bool {
    true
}
fn default_agent_server() -> ServerConfig {
    ServerConfig {
        port: 4001,
        allow_external: false,
    }
}
fn default_relay_server() -> ServerConfig {
    ServerConfig {
        port: 3000,
        allow_external: false,
    }
}
fn default_upstream_url() -> String {
    "http://localhost:4001/health".to_string()
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
fn default_source_timeout_ms() -> u64 {
    10_000
}
fn default_latency_timeout_ms() -> u64 {
    2_000
}
fn default_sample_interval_ms() -> u64 {
    500
}
fn default_latency_host() -> String {
    "8.8.8.8".to_string()
}
fn default_latency_port() -> u16 {
    53
}
