//! 디스크 레이아웃 수집.

use hostpulse_core::models::telemetry::DiskDevice;
use sysinfo::{DiskKind, Disks};

/// 장치 유형 이름
pub fn kind_label(kind: DiskKind) -> &'static str {
    match kind {
        DiskKind::HDD => "HDD",
        DiskKind::SSD => "SSD",
        DiskKind::Unknown(_) => "unknown",
    }
}

/// 마운트된 디스크 목록
///
/// SMART 상태는 sysinfo로 알 수 없으므로 항상 None.
pub fn list_disks() -> Vec<DiskDevice> {
    let disks = Disks::new_with_refreshed_list();

    disks
        .list()
        .iter()
        .map(|d| DiskDevice {
            device: d.name().to_string_lossy().to_string(),
            kind: kind_label(d.kind()).to_string(),
            name: d.mount_point().to_string_lossy().to_string(),
            smart_status: None,
            size_bytes: d.total_space(),
        })
        .collect()
}
