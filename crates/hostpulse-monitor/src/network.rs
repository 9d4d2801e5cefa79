//! 네트워크 처리량/인터페이스 설정 수집.
//!
//! 결과는 인터페이스 이름 순으로 정렬한다.

use hostpulse_core::models::telemetry::{InterfaceConfig, InterfaceStats};
use std::net::IpAddr;
use std::time::{Duration, Instant};
use sysinfo::{IpNetwork, Networks};
use tracing::debug;

/// 인터페이스별 처리량 샘플링
///
/// `received()`/`transmitted()`는 직전 갱신 이후 증가분이므로 경과 시간으로
/// 나누어 초당 바이트를 구한다.
pub fn sample_traffic(interval: Duration) -> Vec<InterfaceStats> {
    let mut networks = Networks::new_with_refreshed_list();
    let started = Instant::now();

    std::thread::sleep(interval);
    networks.refresh(true);

    let elapsed_secs = started.elapsed().as_secs_f64();
    let per_sec = |bytes: u64| {
        if elapsed_secs > 0.0 {
            bytes as f64 / elapsed_secs
        } else {
            0.0
        }
    };

    let mut stats: Vec<InterfaceStats> = networks
        .list()
        .iter()
        .map(|(name, data)| InterfaceStats {
            iface: name.clone(),
            rx_bytes: data.total_received(),
            tx_bytes: data.total_transmitted(),
            rx_sec: per_sec(data.received()),
            tx_sec: per_sec(data.transmitted()),
        })
        .collect();
    stats.sort_by(|a, b| a.iface.cmp(&b.iface));

    debug!("네트워크 처리량 샘플: 인터페이스 {}개, {:.0}ms", stats.len(), elapsed_secs * 1000.0);
    stats
}

/// 대표 IP 선택: IPv4 우선, 없으면 첫 주소, 그것도 없으면 빈 문자열
pub fn primary_ip(networks: &[IpNetwork]) -> String {
    networks
        .iter()
        .find(|n| matches!(n.addr, IpAddr::V4(_)))
        .or_else(|| networks.first())
        .map(|n| n.addr.to_string())
        .unwrap_or_default()
}

/// 인터페이스 설정 목록
pub fn list_interfaces() -> Vec<InterfaceConfig> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<InterfaceConfig> = networks
        .list()
        .iter()
        .map(|(name, data)| InterfaceConfig {
            iface: name.clone(),
            ip: primary_ip(data.ip_networks()),
            mac: data.mac_address().to_string(),
            speed_mbps: link_speed(name),
        })
        .collect();
    interfaces.sort_by(|a, b| a.iface.cmp(&b.iface));
    interfaces
}

#[cfg(target_os = "linux")]
fn link_speed(iface: &str) -> Option<u64> {
    crate::linux::link_speed(iface)
}

#[cfg(not(target_os = "linux"))]
fn link_speed(_iface: &str) -> Option<u64> {
    None
}
