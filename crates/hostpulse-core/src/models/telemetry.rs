//! 텔레메트리 소스 원시 측정값.
//!
//! 각 소스가 반환하는 가공 전 데이터. 단위는 소스가 제공하는 그대로
//! (바이트, 바이트/초, 퍼센트)이며, 정규화는 [`crate::normalize`]에서 수행한다.

use serde::{Deserialize, Serialize};

/// CPU 부하 측정값 (퍼센트, 0.0 ~ 100.0)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuLoad {
    /// 전체 부하
    pub current_load: f64,
    /// 사용자 모드 부하
    pub user_load: f64,
    /// 커널 모드 부하
    pub system_load: f64,
    /// 인터럽트 처리 부하
    pub irq_load: f64,
    /// 코어별 부하 (코어 순서)
    pub cores: Vec<f64>,
}

/// 메모리 측정값 (바이트)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryReading {
    /// 전체 메모리
    pub total: u64,
    /// 사용 중 메모리
    pub used: u64,
    /// 여유 메모리
    pub free: u64,
}

/// 시스템 시간 측정값
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeReading {
    /// 부팅 이후 경과 시간 (초)
    pub uptime_secs: u64,
}

/// 디스크 장치 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskDevice {
    /// 장치 경로 (예: "/dev/nvme0n1p2")
    pub device: String,
    /// 장치 유형 (예: "SSD", "HDD")
    pub kind: String,
    /// 표시 이름
    pub name: String,
    /// SMART 상태 (확인 불가 시 None)
    pub smart_status: Option<String>,
    /// 전체 용량 (바이트)
    pub size_bytes: u64,
}

/// 프로세스 한 개의 측정값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessEntry {
    /// 프로세스 ID
    pub pid: u32,
    /// 프로세스 이름
    pub name: String,
    /// CPU 사용률 (%)
    pub cpu_percent: f64,
    /// 메모리 사용량 (바이트)
    pub memory_bytes: u64,
}

/// 프로세스 목록 측정값
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessTable {
    /// 전체 프로세스 수
    pub all: u32,
    /// 실행 중 프로세스 수
    pub running: u32,
    /// 블록(I/O 대기) 프로세스 수
    pub blocked: u32,
    /// 프로세스 목록 (소스 반환 순서)
    pub list: Vec<ProcessEntry>,
}

/// 네트워크 인터페이스 처리량 통계
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceStats {
    /// 인터페이스 이름
    pub iface: String,
    /// 누적 수신 바이트
    pub rx_bytes: u64,
    /// 누적 송신 바이트
    pub tx_bytes: u64,
    /// 수신 속도 (bytes/sec)
    pub rx_sec: f64,
    /// 송신 속도 (bytes/sec)
    pub tx_sec: f64,
}

/// 네트워크 인터페이스 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// 인터페이스 이름
    pub iface: String,
    /// 대표 IP 주소 (없으면 빈 문자열)
    pub ip: String,
    /// MAC 주소
    pub mac: String,
    /// 링크 속도 (Mbps, 확인 불가 시 None)
    pub speed_mbps: Option<u64>,
}

/// 모든 소스의 측정값 묶음
///
/// 집계기가 팬아웃 결과를 조인한 뒤 조립 단계로 넘기는 단위.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryReadings {
    pub cpu: CpuLoad,
    pub memory: MemoryReading,
    pub time: TimeReading,
    pub disks: Vec<DiskDevice>,
    pub processes: ProcessTable,
    pub network_stats: Vec<InterfaceStats>,
    pub network_interfaces: Vec<InterfaceConfig>,
    /// 지연 시간 (ms). 프로브 실패 시 [`crate::aggregator::LATENCY_UNAVAILABLE`]
    pub latency_ms: f64,
}
