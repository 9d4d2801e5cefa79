//! 불투명 레코드 모델.
//!
//! 소유자(서버) ID로 묶인 임의 페이로드. 저장소는 페이로드를 해석하거나
//! 변형하지 않는다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 저장된 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// 레코드 ID (저장소가 할당)
    pub id: i64,
    /// 소유자 ID
    pub server_id: String,
    /// 페이로드 (저장 시 그대로)
    pub data: String,
    /// 저장 시각
    pub created_at: DateTime<Utc>,
}
