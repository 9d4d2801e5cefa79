//! 레코드 저장소 포트.
//!
//! 구현: `hostpulse-storage` crate (rusqlite)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::record::StoredRecord;

/// 소유자 ID로 묶인 불투명 레코드 저장소
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// 레코드 저장 후 저장된 행 반환
    async fn store(&self, owner_id: &str, payload: &str) -> Result<StoredRecord, CoreError>;

    /// 소유자의 레코드 전체 조회 (저장 순서)
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<StoredRecord>, CoreError>;
}
