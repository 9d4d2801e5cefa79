//! 호스트 상태 스냅샷 모델.
//!
//! 에이전트가 요청마다 새로 조립하는 불변 문서. 릴레이는 이 문서를
//! 변형 없이 전달한다. 와이어 필드명은 camelCase이며 단위 접미사
//! (`MB`, `GB`)는 대문자를 유지한다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 단일 시점의 호스트 텔레메트리 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// 조립 시각 (RFC3339)
    pub timestamp: DateTime<Utc>,
    /// CPU 부하 요약
    pub cpu: CpuSummary,
    /// 코어별 부하 (%)
    pub cpu_cores: Vec<f64>,
    /// 메모리 요약
    pub memory: MemorySummary,
    /// 부팅 후 경과 시간 (초)
    pub uptime_seconds: u64,
    /// 디스크/프로세스 지표
    pub system_metrics: SystemMetrics,
    /// 네트워크 지표
    pub functional_metrics: FunctionalMetrics,
}

/// CPU 부하 요약 (%, 소수점 2자리)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuSummary {
    pub overall: f64,
    pub user: f64,
    pub system: f64,
    pub interrupt: f64,
}

/// 메모리 요약
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemorySummary {
    #[serde(rename = "totalMB")]
    pub total_mb: u64,
    #[serde(rename = "usedMB")]
    pub used_mb: u64,
    #[serde(rename = "freeMB")]
    pub free_mb: u64,
    /// usedMB / totalMB * 100 (소수점 2자리, totalMB == 0이면 0)
    #[serde(rename = "usagePercent")]
    pub usage_percent: f64,
}

/// 디스크/프로세스 지표
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub disk: Vec<DiskSummary>,
    pub processes: ProcessSummary,
}

/// 디스크 한 개의 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskSummary {
    pub device: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// SMART 상태, 확인 불가 시 "unknown"
    pub health: String,
    #[serde(rename = "sizeGB")]
    pub size_gb: f64,
}

/// 프로세스 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSummary {
    pub total: u32,
    pub running: u32,
    pub blocked: u32,
    /// CPU 사용률 상위 프로세스 (내림차순)
    pub top_processes: Vec<TopProcess>,
}

/// CPU 상위 프로세스
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProcess {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_bytes: u64,
}

/// 네트워크 지표
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalMetrics {
    pub network_interfaces: Vec<InterfaceSummary>,
    pub traffic_analysis: Vec<TrafficAnalysis>,
    /// 기준 호스트까지 왕복 지연 (ms), 프로브 실패 시 -1
    pub latency_ms: f64,
}

/// 네트워크 인터페이스 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceSummary {
    pub iface: String,
    pub ip: String,
    pub mac: String,
    pub speed_mbps: Option<u64>,
}

/// 인터페이스별 트래픽 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficAnalysis {
    pub iface: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_sec: f64,
    pub tx_sec: f64,
    /// (rxSec + txSec) * 8 / 1e6 (소수점 2자리)
    pub throughput_mbps: f64,
    /// 어느 한 방향이라도 5 MB/s 초과
    pub is_spike: bool,
    /// 양방향 모두 50 KB/s 미만
    pub is_drop: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        let memory = MemorySummary {
            total_mb: 7629,
            used_mb: 3815,
            free_mb: 3815,
            usage_percent: 50.01,
        };
        let json = serde_json::to_value(memory).unwrap();
        assert_eq!(json["totalMB"], 7629);
        assert_eq!(json["usedMB"], 3815);
        assert_eq!(json["freeMB"], 3815);
        assert_eq!(json["usagePercent"], 50.01);

        let disk = DiskSummary {
            device: "/dev/sda".to_string(),
            kind: "SSD".to_string(),
            name: "/".to_string(),
            health: "unknown".to_string(),
            size_gb: 512.11,
        };
        let json = serde_json::to_value(disk).unwrap();
        assert_eq!(json["type"], "SSD");
        assert_eq!(json["sizeGB"], 512.11);

        let traffic = TrafficAnalysis {
            iface: "eth0".to_string(),
            rx_bytes: 1,
            tx_bytes: 2,
            rx_sec: 10_000.0,
            tx_sec: 20_000.0,
            throughput_mbps: 0.24,
            is_spike: false,
            is_drop: true,
        };
        let json = serde_json::to_value(traffic).unwrap();
        assert_eq!(json["throughputMbps"], 0.24);
        assert_eq!(json["isDrop"], true);
        assert_eq!(json["rxSec"], 10_000.0);
    }
}
