//! hostpulse 도메인 모델.
//!
//! 텔레메트리 원시 측정값, 조립된 스냅샷, 불투명 레코드를 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod record;
pub mod snapshot;
pub mod telemetry;
