//! 에이전트 API 핸들러.

use axum::extract::State;
use axum::Json;
use hostpulse_core::models::snapshot::Snapshot;
use tracing::error;

use crate::error::ApiError;
use crate::AgentState;

/// 에이전트 인사 메시지
pub const AGENT_GREETING: &str = "Hello World this is hostpulse agent!";

/// GET /
pub async fn index() -> &'static str {
    AGENT_GREETING
}

/// 스냅샷 1개 생성 후 반환
///
/// GET /health
pub async fn get_health(State(state): State<AgentState>) -> Result<Json<Snapshot>, ApiError> {
    match state.aggregator.produce_snapshot().await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => {
            error!("스냅샷 생성 실패: {e}");
            Err(ApiError::HealthData(e.to_string()))
        }
    }
}
