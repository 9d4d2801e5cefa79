//! API 핸들러 모듈.
//!
//! - `health`: 에이전트 (스냅샷 생성)
//! - `relay`: 릴레이 (업스트림 전달)
//! - `records`: 릴레이 레코드 저장/조회

pub mod health;
pub mod records;
pub mod relay;
