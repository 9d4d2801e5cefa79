//! 복합 지표 도출.
//!
//! 네트워크 트래픽 급증/급감 판정과 CPU 상위 프로세스 선정.
//! 임계값은 고정 상수이며 설정으로 바꿀 수 없다.

use crate::models::snapshot::{TopProcess, TrafficAnalysis};
use crate::models::telemetry::{InterfaceStats, ProcessEntry};
use crate::normalize::{percent, round_to};

/// 급증 임계값: 어느 한 방향이라도 초과 시 spike (5 MB/s)
pub const SPIKE_THRESHOLD_BPS: f64 = 5_000_000.0;

/// 급감 임계값: 양방향 모두 미만 시 drop (50 KB/s)
pub const DROP_THRESHOLD_BPS: f64 = 50_000.0;

/// 상위 프로세스 개수
pub const TOP_PROCESS_LIMIT: usize = 5;

/// 바이트/초 합계 → Mbps (소수점 2자리)
pub fn throughput_mbps(rx_sec: f64, tx_sec: f64) -> f64 {
    round_to((rx_sec + tx_sec) * 8.0 / 1e6, 2)
}

/// 급증 여부
pub fn is_spike(rx_sec: f64, tx_sec: f64) -> bool {
    rx_sec > SPIKE_THRESHOLD_BPS || tx_sec > SPIKE_THRESHOLD_BPS
}

/// 급감 여부
pub fn is_drop(rx_sec: f64, tx_sec: f64) -> bool {
    rx_sec < DROP_THRESHOLD_BPS && tx_sec < DROP_THRESHOLD_BPS
}

/// 인터페이스 한 개의 트래픽 분석
pub fn analyze_interface(stat: &InterfaceStats) -> TrafficAnalysis {
    TrafficAnalysis {
        iface: stat.iface.clone(),
        rx_bytes: stat.rx_bytes,
        tx_bytes: stat.tx_bytes,
        rx_sec: stat.rx_sec,
        tx_sec: stat.tx_sec,
        throughput_mbps: throughput_mbps(stat.rx_sec, stat.tx_sec),
        is_spike: is_spike(stat.rx_sec, stat.tx_sec),
        is_drop: is_drop(stat.rx_sec, stat.tx_sec),
    }
}

/// 인터페이스별 트래픽 분석 (소스 반환 순서 유지)
pub fn analyze_traffic(stats: &[InterfaceStats]) -> Vec<TrafficAnalysis> {
    stats.iter().map(analyze_interface).collect()
}

/// CPU 사용률 상위 프로세스 선정
///
/// CPU% 내림차순 안정 정렬 후 최대 [`TOP_PROCESS_LIMIT`]개를 취한다.
/// 같은 CPU%끼리는 소스 반환 순서를 유지한다.
pub fn rank_top_processes(list: &[ProcessEntry]) -> Vec<TopProcess> {
    let mut ranked: Vec<&ProcessEntry> = list.iter().collect();
    // sort_by는 안정 정렬
    ranked.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));

    ranked
        .into_iter()
        .take(TOP_PROCESS_LIMIT)
        .map(|p| TopProcess {
            pid: p.pid,
            name: p.name.clone(),
            cpu_percent: percent(p.cpu_percent),
            memory_bytes: p.memory_bytes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(iface: &str, rx_sec: f64, tx_sec: f64) -> InterfaceStats {
        InterfaceStats {
            iface: iface.to_string(),
            rx_bytes: 1_000,
            tx_bytes: 2_000,
            rx_sec,
            tx_sec,
        }
    }

    fn process(pid: u32, cpu_percent: f64) -> ProcessEntry {
        ProcessEntry {
            pid,
            name: format!("proc-{pid}"),
            cpu_percent,
            memory_bytes: pid as u64 * 1024,
        }
    }

    #[test]
    fn spike_example() {
        let result = analyze_interface(&stat("eth0", 6_000_000.0, 100_000.0));
        assert!(result.is_spike);
        assert!(!result.is_drop);
        assert_eq!(result.throughput_mbps, 48.8);
    }

    #[test]
    fn drop_example() {
        let result = analyze_interface(&stat("eth0", 10_000.0, 20_000.0));
        assert!(!result.is_spike);
        assert!(result.is_drop);
        assert_eq!(result.throughput_mbps, 0.24);
    }

    #[test]
    fn normal_traffic_is_neither() {
        let result = analyze_interface(&stat("wlan0", 1_000_000.0, 60_000.0));
        assert!(!result.is_spike);
        assert!(!result.is_drop);
    }

    #[test]
    fn thresholds_are_strict() {
        // 정확히 임계값이면 spike/drop 아님
        assert!(!is_spike(5_000_000.0, 5_000_000.0));
        assert!(!is_drop(50_000.0, 0.0));
        assert!(is_spike(0.0, 5_000_001.0));
        assert!(is_drop(49_999.0, 49_999.0));
    }

    #[test]
    fn throughput_matches_formula() {
        for (rx, tx) in [(0.0, 0.0), (125_000.0, 0.0), (1_234_567.0, 7_654_321.0)] {
            assert_eq!(throughput_mbps(rx, tx), round_to((rx + tx) * 8.0 / 1e6, 2));
        }
        assert_eq!(throughput_mbps(125_000.0, 0.0), 1.0);
    }

    #[test]
    fn analysis_keeps_source_order() {
        let stats = vec![stat("lo", 0.0, 0.0), stat("eth0", 1.0, 1.0), stat("docker0", 2.0, 2.0)];
        let names: Vec<String> = analyze_traffic(&stats).into_iter().map(|a| a.iface).collect();
        assert_eq!(names, vec!["lo", "eth0", "docker0"]);
    }

    #[test]
    fn top_processes_sorted_and_limited() {
        let list: Vec<ProcessEntry> = [3.0, 50.0, 0.5, 12.0, 99.0, 7.0, 0.0, 12.5]
            .iter()
            .enumerate()
            .map(|(i, cpu)| process(i as u32 + 1, *cpu))
            .collect();

        let top = rank_top_processes(&list);
        assert_eq!(top.len(), TOP_PROCESS_LIMIT);

        let cpus: Vec<f64> = top.iter().map(|p| p.cpu_percent).collect();
        assert_eq!(cpus, vec![99.0, 50.0, 12.5, 12.0, 7.0]);

        // 선택된 모든 항목 >= 선택되지 않은 모든 항목
        let min_selected = cpus.iter().cloned().fold(f64::INFINITY, f64::min);
        let selected: Vec<u32> = top.iter().map(|p| p.pid).collect();
        for p in list.iter().filter(|p| !selected.contains(&p.pid)) {
            assert!(p.cpu_percent <= min_selected);
        }
    }

    #[test]
    fn top_processes_fewer_than_limit() {
        let list = vec![process(1, 1.0), process(2, 2.0)];
        let top = rank_top_processes(&list);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].pid, 2);
        assert!(rank_top_processes(&[]).is_empty());
    }

    #[test]
    fn ties_keep_source_order() {
        let list = vec![
            process(10, 5.0),
            process(11, 9.0),
            process(12, 5.0),
            process(13, 5.0),
            process(14, 5.0),
            process(15, 5.0),
        ];
        let pids: Vec<u32> = rank_top_processes(&list).iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![11, 10, 12, 13, 14]);
    }

    #[test]
    fn top_process_fields() {
        let top = rank_top_processes(&[ProcessEntry {
            pid: 42,
            name: "postgres".to_string(),
            cpu_percent: 12.345_6,
            memory_bytes: 104_857_600,
        }]);
        assert_eq!(top[0].name, "postgres");
        assert_eq!(top[0].cpu_percent, 12.35);
        assert_eq!(top[0].memory_bytes, 104_857_600);
    }
}
