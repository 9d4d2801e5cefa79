//! # hostpulse-storage
//!
//! 로컬 저장소 어댑터.
//! 릴레이가 받은 소유자별 레코드를 SQLite에 저장하고 스키마 마이그레이션을 관리한다.
//!
//! ## 모듈
//! - `sqlite`: 레코드 저장소 (RecordStorage 구현)
//! - `migration`: 스키마 마이그레이션

pub mod migration;
pub mod sqlite;

pub use sqlite::SqliteRecordStorage;
