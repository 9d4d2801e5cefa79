//! `TelemetrySource` 포트 구현.

use async_trait::async_trait;
use hostpulse_core::config::MonitorConfig;
use hostpulse_core::error::CoreError;
use hostpulse_core::models::telemetry::{
    CpuLoad, DiskDevice, InterfaceConfig, InterfaceStats, MemoryReading, ProcessTable, TimeReading,
};
use hostpulse_core::ports::telemetry::TelemetrySource;
use std::time::Duration;

use crate::{disk, latency, network, process, system};

/// sysinfo 기반 텔레메트리 소스
///
/// 호출마다 새 sysinfo 핸들을 만들기 때문에 호출 간 공유 상태가 없다.
/// 블로킹 수집은 tokio 블로킹 스레드 풀에서 실행된다.
pub struct SysInfoTelemetry {
    sample_interval: Duration,
    latency_host: String,
    latency_port: u16,
}

impl SysInfoTelemetry {
    /// 새 텔레메트리 소스 생성
    pub fn new(sample_interval: Duration, latency_host: impl Into<String>, latency_port: u16) -> Self {
        Self {
            sample_interval,
            latency_host: latency_host.into(),
            latency_port,
        }
    }

    /// 모니터 설정으로 생성
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(
            config.sample_interval(),
            config.latency_host.clone(),
            config.latency_port,
        )
    }
}

impl Default for SysInfoTelemetry {
    fn default() -> Self {
        Self::from_config(&MonitorConfig::default())
    }
}

/// 블로킹 수집 작업 실행
async fn blocking<T, F>(task: F) -> Result<T, CoreError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| CoreError::Internal(format!("블로킹 작업 조인 실패: {e}")))?
}

#[async_trait]
impl TelemetrySource for SysInfoTelemetry {
    async fn current_load(&self) -> Result<CpuLoad, CoreError> {
        let interval = self.sample_interval;
        blocking(move || system::sample_cpu(interval)).await
    }

    async fn memory_info(&self) -> Result<MemoryReading, CoreError> {
        blocking(system::read_memory).await
    }

    async fn system_time(&self) -> Result<TimeReading, CoreError> {
        Ok(system::read_uptime())
    }

    async fn disk_layout(&self) -> Result<Vec<DiskDevice>, CoreError> {
        blocking(|| Ok(disk::list_disks())).await
    }

    async fn process_list(&self) -> Result<ProcessTable, CoreError> {
        let interval = self.sample_interval;
        blocking(move || Ok(process::sample_processes(interval))).await
    }

    async fn network_stats(&self) -> Result<Vec<InterfaceStats>, CoreError> {
        let interval = self.sample_interval;
        blocking(move || Ok(network::sample_traffic(interval))).await
    }

    async fn network_interfaces(&self) -> Result<Vec<InterfaceConfig>, CoreError> {
        blocking(|| Ok(network::list_interfaces())).await
    }

    async fn ping_latency(&self) -> Result<f64, CoreError> {
        latency::tcp_connect_latency(&self.latency_host, self.latency_port).await
    }
}
