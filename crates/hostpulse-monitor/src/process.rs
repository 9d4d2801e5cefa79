//! 프로세스 목록 수집.
//!
//! CPU 사용률은 두 번의 갱신 차이로 계산되므로 샘플 간격만큼 대기한다.
//! Linux에서는 스레드(task)도 별도 항목으로 보이므로 프로세스만 남긴다.

use hostpulse_core::models::telemetry::{ProcessEntry, ProcessTable};
use std::time::Duration;
use sysinfo::{ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, RefreshKind, System};
use tracing::debug;

fn refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing()
        .with_cpu()
        .with_memory()
        .without_tasks()
}

/// 프로세스 상태 집계 + 목록 (PID 오름차순)
pub fn sample_processes(interval: Duration) -> ProcessTable {
    let mut sys = System::new_with_specifics(RefreshKind::nothing().with_processes(refresh_kind()));

    std::thread::sleep(interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind());

    let mut list: Vec<ProcessEntry> = Vec::with_capacity(sys.processes().len());
    let mut running = 0u32;
    let mut blocked = 0u32;

    for process in sys.processes().values() {
        if process.thread_kind().is_some() {
            continue;
        }
        match process.status() {
            ProcessStatus::Run => running += 1,
            ProcessStatus::UninterruptibleDiskSleep => blocked += 1,
            _ => {}
        }
        list.push(ProcessEntry {
            pid: process.pid().as_u32(),
            name: process.name().to_string_lossy().to_string(),
            cpu_percent: process.cpu_usage() as f64,
            memory_bytes: process.memory(),
        });
    }

    // HashMap 순회 순서는 비결정적
    list.sort_by_key(|p| p.pid);

    debug!(
        "프로세스 {}개 수집 (running={running}, blocked={blocked})",
        list.len()
    );

    ProcessTable {
        all: list.len() as u32,
        running,
        blocked,
        list,
    }
}
