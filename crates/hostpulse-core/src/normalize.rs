//! 단위 정규화.
//!
//! 원시 측정값(바이트, 비율)을 스냅샷 단위로 변환하는 순수 함수.
//! I/O 없음.

/// 1 MB (MiB, 1024 * 1024 바이트)
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// 1 GB (10진, 1e9 바이트). 디스크 용량 표기에 사용
const BYTES_PER_GB: f64 = 1e9;

/// 소수점 `decimals` 자리로 반올림 (0.5는 0에서 먼 쪽으로)
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// 퍼센트 값 정규화 (소수점 2자리)
pub fn percent(value: f64) -> f64 {
    round_to(value, 2)
}

/// 바이트 → MB (정수 반올림)
pub fn bytes_to_mb(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_MB).round() as u64
}

/// 바이트 → GB (소수점 2자리)
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round_to(bytes as f64 / BYTES_PER_GB, 2)
}

/// 사용률 (%) = used / total * 100, 소수점 2자리
///
/// `total == 0`이면 0을 반환한다.
pub fn usage_percent(used_mb: u64, total_mb: u64) -> f64 {
    if total_mb == 0 {
        return 0.0;
    }
    percent(used_mb as f64 / total_mb as f64 * 100.0)
}
