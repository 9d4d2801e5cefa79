//! CPU/메모리/가동 시간 수집.
//!
//! 모든 함수는 블로킹이며 호출마다 새 `System` 핸들을 만든다.
//! 호출자는 `spawn_blocking` 안에서 실행해야 한다.

use hostpulse_core::error::CoreError;
use hostpulse_core::models::telemetry::{CpuLoad, MemoryReading, TimeReading};
use std::time::Duration;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

/// CPU 부하 샘플링
///
/// sysinfo는 두 번의 갱신 사이 차이로 사용률을 계산하므로 최소
/// `MINIMUM_CPU_UPDATE_INTERVAL` 만큼 대기한다.
pub fn sample_cpu(interval: Duration) -> Result<CpuLoad, CoreError> {
    let mut sys =
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()));

    #[cfg(target_os = "linux")]
    let before = crate::linux::read_cpu_times().ok();

    std::thread::sleep(interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_usage();

    if sys.cpus().is_empty() {
        return Err(CoreError::Source("CPU 정보를 읽을 수 없음".to_string()));
    }

    let current_load = sys.global_cpu_usage() as f64;
    let cores: Vec<f64> = sys.cpus().iter().map(|c| c.cpu_usage() as f64).collect();

    #[cfg(target_os = "linux")]
    let (user_load, system_load, irq_load) = match (before, crate::linux::read_cpu_times().ok()) {
        (Some(before), Some(after)) => {
            let b = crate::linux::cpu_breakdown(&before, &after);
            (b.user, b.system, b.irq)
        }
        _ => (current_load, 0.0, 0.0),
    };

    // 모드별 분해를 지원하지 않는 플랫폼
    #[cfg(not(target_os = "linux"))]
    let (user_load, system_load, irq_load) = (current_load, 0.0, 0.0);

    debug!(
        "CPU 샘플: 전체 {:.1}%, 코어 {}개",
        current_load,
        cores.len()
    );

    Ok(CpuLoad {
        current_load,
        user_load,
        system_load,
        irq_load,
        cores,
    })
}

/// 메모리 사용량 (바이트)
pub fn read_memory() -> Result<MemoryReading, CoreError> {
    let sys = System::new_with_specifics(
        RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
    );

    let total = sys.total_memory();
    if total == 0 {
        return Err(CoreError::Source("메모리 정보를 읽을 수 없음".to_string()));
    }

    Ok(MemoryReading {
        total,
        used: sys.used_memory(),
        free: sys.free_memory(),
    })
}

/// 부팅 후 경과 시간
pub fn read_uptime() -> TimeReading {
    TimeReading {
        uptime_secs: System::uptime(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_cpu() {
        let cpu = sample_cpu(Duration::from_millis(10)).unwrap();
        assert!(!cpu.cores.is_empty());
        assert!(cpu.current_load >= 0.0);
        assert!(cpu.user_load >= 0.0);
        assert!(cpu.irq_load >= 0.0);
    }

    #[test]
    fn reads_memory() {
        let memory = read_memory().unwrap();
        assert!(memory.total > 0);
        assert!(memory.used <= memory.total);
        assert!(memory.free <= memory.total);
    }

    #[test]
    fn reads_uptime() {
        assert!(read_uptime().uptime_secs > 0);
    }
}
