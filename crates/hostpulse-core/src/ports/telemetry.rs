//! 텔레메트리 소스 포트.
//!
//! 구현: `hostpulse-monitor` crate (sysinfo + 플랫폼별 리더)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::telemetry::{
    CpuLoad, DiskDevice, InterfaceConfig, InterfaceStats, MemoryReading, ProcessTable,
    TimeReading,
};

/// 호스트 텔레메트리 소스 집합
///
/// 각 조회는 서로 독립적이며 개별적으로 실패할 수 있다.
/// 집계기는 모든 조회를 동시에 실행하므로 구현체는 호출 간 가변 상태를
/// 공유하지 않아야 한다.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// 현재 CPU 부하
    async fn current_load(&self) -> Result<CpuLoad, CoreError>;

    /// 메모리 사용량 (바이트)
    async fn memory_info(&self) -> Result<MemoryReading, CoreError>;

    /// 시스템 시간 (uptime)
    async fn system_time(&self) -> Result<TimeReading, CoreError>;

    /// 디스크 장치 목록
    async fn disk_layout(&self) -> Result<Vec<DiskDevice>, CoreError>;

    /// 프로세스 목록과 상태별 개수
    async fn process_list(&self) -> Result<ProcessTable, CoreError>;

    /// 인터페이스별 처리량 통계
    async fn network_stats(&self) -> Result<Vec<InterfaceStats>, CoreError>;

    /// 인터페이스 설정 (IP, MAC, 링크 속도)
    async fn network_interfaces(&self) -> Result<Vec<InterfaceConfig>, CoreError>;

    /// 기준 호스트까지 왕복 지연 (ms)
    async fn ping_latency(&self) -> Result<f64, CoreError>;
}
