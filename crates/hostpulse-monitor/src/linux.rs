//! Linux 플랫폼 지원.
//!
//! sysinfo가 제공하지 않는 값을 procfs/sysfs에서 직접 읽는다.
//!
//! - `/proc/stat`: CPU 모드별(user/system/irq) 부하 분해
//! - `/sys/class/net/<iface>/speed`: 인터페이스 링크 속도 (Mbps)

use hostpulse_core::error::CoreError;
use std::path::Path;

const PROC_STAT: &str = "/proc/stat";
const SYS_CLASS_NET: &str = "/sys/class/net";

/// `/proc/stat` 첫 줄(`cpu ...`)의 누적 jiffies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuTimes {
    /// 모든 모드의 합
    pub fn total(&self) -> u64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.softirq
            + self.steal
    }
}

/// 두 샘플 사이 모드별 부하 (%)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuBreakdown {
    pub user: f64,
    pub system: f64,
    pub irq: f64,
}

/// `/proc/stat` 내용에서 전체 CPU 줄 파싱
///
/// 오래된 커널은 뒤쪽 필드(steal 등)가 없으므로 없는 필드는 0으로 본다.
pub fn parse_proc_stat(content: &str) -> Option<CpuTimes> {
    let line = content
        .lines()
        .find(|l| l.split_whitespace().next() == Some("cpu"))?;

    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse::<u64>())
        .collect::<Result<_, _>>()
        .ok()?;

    if fields.len() < 4 {
        return None;
    }
    let at = |i: usize| fields.get(i).copied().unwrap_or(0);

    Some(CpuTimes {
        user: at(0),
        nice: at(1),
        system: at(2),
        idle: at(3),
        iowait: at(4),
        irq: at(5),
        softirq: at(6),
        steal: at(7),
    })
}

/// `/proc/stat` 읽기
pub fn read_cpu_times() -> Result<CpuTimes, CoreError> {
    let content = std::fs::read_to_string(PROC_STAT)?;
    parse_proc_stat(&content)
        .ok_or_else(|| CoreError::Source(format!("{PROC_STAT} 형식 인식 실패")))
}

/// 두 샘플의 jiffies 차이로 모드별 부하 계산
///
/// 카운터가 역행하거나 변화가 없으면 0을 반환한다.
pub fn cpu_breakdown(before: &CpuTimes, after: &CpuTimes) -> CpuBreakdown {
    let total = after.total().saturating_sub(before.total());
    if total == 0 {
        return CpuBreakdown::default();
    }
    let share = |a: u64, b: u64| a.saturating_sub(b) as f64 * 100.0 / total as f64;

    CpuBreakdown {
        user: share(after.user, before.user),
        system: share(after.system, before.system),
        irq: share(after.irq, before.irq),
    }
}

/// sysfs speed 파일 내용 파싱: 음수(-1: 링크 없음)나 비정상 값은 None
pub fn parse_link_speed(content: &str) -> Option<u64> {
    let speed: i64 = content.trim().parse().ok()?;
    u64::try_from(speed).ok()
}

/// 인터페이스 링크 속도 (Mbps)
///
/// 가상 인터페이스(lo, docker0 등)는 읽기 자체가 실패하므로 None.
pub fn link_speed(iface: &str) -> Option<u64> {
    let path = Path::new(SYS_CLASS_NET).join(iface).join("speed");
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| parse_link_speed(&content))
}
