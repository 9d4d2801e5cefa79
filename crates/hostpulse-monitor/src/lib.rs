//! # hostpulse-monitor
//!
//! 텔레메트리 소스 어댑터.
//! CPU/메모리/디스크/프로세스/네트워크 측정값과 지연 시간을 수집한다.
//! 플랫폼 공통 수집은 sysinfo, Linux 전용 값은 procfs/sysfs를 통해 구현.

pub mod disk;
pub mod latency;
pub mod network;
pub mod process;
pub mod source;
pub mod system;

#[cfg(target_os = "linux")]
pub mod linux;

pub use source::SysInfoTelemetry;
