//! 스냅샷 집계기.
//!
//! 텔레메트리 소스 8개를 동시에 조회하고, 결과를 조인한 뒤 단위 정규화와
//! 복합 지표 도출을 거쳐 [`Snapshot`] 하나를 조립한다.
//!
//! - 필수 소스 7개: 하나라도 실패/타임아웃이면 집계 전체가 실패한다.
//!   첫 실패에서 즉시 반환하며 나머지 조회 결과는 버린다.
//! - 지연 시간 프로브: 선택 소스. 실패/타임아웃 시 [`LATENCY_UNAVAILABLE`]을 기록한다.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::analysis::{analyze_traffic, rank_top_processes};
use crate::config::MonitorConfig;
use crate::error::{AggregationError, CoreError, SourceKind};
use crate::models::snapshot::{
    CpuSummary, DiskSummary, FunctionalMetrics, InterfaceSummary, MemorySummary, ProcessSummary,
    Snapshot, SystemMetrics,
};
use crate::models::telemetry::TelemetryReadings;
use crate::normalize::{bytes_to_gb, bytes_to_mb, percent, usage_percent};
use crate::ports::telemetry::TelemetrySource;

/// 지연 시간 프로브 실패 시 기록하는 값
pub const LATENCY_UNAVAILABLE: f64 = -1.0;

/// SMART 상태를 알 수 없을 때의 디스크 health 값
const UNKNOWN_HEALTH: &str = "unknown";

/// 스냅샷 집계기
///
/// 호출 간 공유 가변 상태가 없으므로 여러 요청에서 동시에 호출해도 안전하다.
pub struct SnapshotAggregator {
    source: Arc<dyn TelemetrySource>,
    source_timeout: Duration,
    latency_timeout: Duration,
}

impl SnapshotAggregator {
    /// 새 집계기 생성
    pub fn new(
        source: Arc<dyn TelemetrySource>,
        source_timeout: Duration,
        latency_timeout: Duration,
    ) -> Self {
        Self {
            source,
            source_timeout,
            latency_timeout,
        }
    }

    /// 모니터 설정의 타임아웃으로 생성
    pub fn from_config(source: Arc<dyn TelemetrySource>, config: &MonitorConfig) -> Self {
        Self::new(source, config.source_timeout(), config.latency_timeout())
    }

    /// 스냅샷 1개 생성
    ///
    /// 필수 소스가 하나라도 실패하면 스냅샷을 만들지 않고 에러를 반환한다.
    pub async fn produce_snapshot(&self) -> Result<Snapshot, AggregationError> {
        let started = Instant::now();
        let source = self.source.as_ref();
        let timeout = self.source_timeout;

        let (
            cpu,
            memory,
            time,
            disks,
            processes,
            network_stats,
            network_interfaces,
            latency_ms,
        ) = tokio::try_join!(
            fetch_required(SourceKind::CurrentLoad, timeout, source.current_load()),
            fetch_required(SourceKind::MemoryInfo, timeout, source.memory_info()),
            fetch_required(SourceKind::SystemTime, timeout, source.system_time()),
            fetch_required(SourceKind::DiskLayout, timeout, source.disk_layout()),
            fetch_required(SourceKind::ProcessList, timeout, source.process_list()),
            fetch_required(SourceKind::NetworkStats, timeout, source.network_stats()),
            fetch_required(
                SourceKind::NetworkInterfaces,
                timeout,
                source.network_interfaces()
            ),
            async { Ok::<f64, AggregationError>(self.probe_latency().await) },
        )?;

        let readings = TelemetryReadings {
            cpu,
            memory,
            time,
            disks,
            processes,
            network_stats,
            network_interfaces,
            latency_ms,
        };

        let snapshot = assemble_snapshot(readings, Utc::now());
        debug!(
            "스냅샷 조립 완료: {}ms, 인터페이스 {}개, 프로세스 {}개",
            started.elapsed().as_millis(),
            snapshot.functional_metrics.traffic_analysis.len(),
            snapshot.system_metrics.processes.total
        );
        Ok(snapshot)
    }

    /// 지연 시간 프로브: 실패를 에러가 아닌 값으로 변환
    async fn probe_latency(&self) -> f64 {
        match tokio::time::timeout(self.latency_timeout, self.source.ping_latency()).await {
            Ok(Ok(ms)) => ms,
            Ok(Err(e)) => {
                warn!("지연 시간 프로브 실패, {LATENCY_UNAVAILABLE} 기록: {e}");
                LATENCY_UNAVAILABLE
            }
            Err(_) => {
                warn!(
                    "지연 시간 프로브 타임아웃 ({}ms), {LATENCY_UNAVAILABLE} 기록",
                    self.latency_timeout.as_millis()
                );
                LATENCY_UNAVAILABLE
            }
        }
    }
}

/// 필수 소스 조회: 타임아웃과 실패를 소스 이름이 붙은 집계 에러로 변환
async fn fetch_required<T, F>(
    kind: SourceKind,
    timeout: Duration,
    fetch: F,
) -> Result<T, AggregationError>
where
    F: Future<Output = Result<T, CoreError>>,
{
    match tokio::time::timeout(timeout, fetch).await {
        Ok(Ok(value)) => {
            debug!("소스 {kind} 조회 완료");
            Ok(value)
        }
        Ok(Err(cause)) => Err(AggregationError::SourceFailed { kind, cause }),
        Err(_) => Err(AggregationError::SourceTimeout {
            kind,
            timeout_ms: timeout.as_millis() as u64,
        }),
    }
}

/// 측정값 묶음 → 스냅샷 조립 (순수 함수)
pub fn assemble_snapshot(readings: TelemetryReadings, timestamp: DateTime<Utc>) -> Snapshot {
    let TelemetryReadings {
        cpu,
        memory,
        time,
        disks,
        processes,
        network_stats,
        network_interfaces,
        latency_ms,
    } = readings;

    let total_mb = bytes_to_mb(memory.total);
    let used_mb = bytes_to_mb(memory.used);
    let free_mb = bytes_to_mb(memory.free);

    Snapshot {
        timestamp,
        cpu: CpuSummary {
            overall: percent(cpu.current_load),
            user: percent(cpu.user_load),
            system: percent(cpu.system_load),
            interrupt: percent(cpu.irq_load),
        },
        cpu_cores: cpu.cores.iter().map(|load| percent(*load)).collect(),
        memory: MemorySummary {
            total_mb,
            used_mb,
            free_mb,
            usage_percent: usage_percent(used_mb, total_mb),
        },
        uptime_seconds: time.uptime_secs,
        system_metrics: SystemMetrics {
            disk: disks
                .into_iter()
                .map(|d| DiskSummary {
                    device: d.device,
                    kind: d.kind,
                    name: d.name,
                    health: d
                        .smart_status
                        .filter(|s| !s.is_empty())
                        .unwrap_or_else(|| UNKNOWN_HEALTH.to_string()),
                    size_gb: bytes_to_gb(d.size_bytes),
                })
                .collect(),
            processes: ProcessSummary {
                total: processes.all,
                running: processes.running,
                blocked: processes.blocked,
                top_processes: rank_top_processes(&processes.list),
            },
        },
        functional_metrics: FunctionalMetrics {
            traffic_analysis: analyze_traffic(&network_stats),
            network_interfaces: network_interfaces
                .into_iter()
                .map(|i| InterfaceSummary {
                    iface: i.iface,
                    ip: i.ip,
                    mac: i.mac,
                    speed_mbps: i.speed_mbps,
                })
                .collect(),
            latency_ms,
        },
    }
}
