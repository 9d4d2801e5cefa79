//! 릴레이 전달 핸들러.
//!
//! 업스트림 응답 본문은 파싱하지 않고 바이트 그대로 돌려준다.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::RelayState;

/// 릴레이 인사 메시지
pub const RELAY_GREETING: &str = "Hello World this is hostpulse relay!";

/// GET /
pub async fn index() -> &'static str {
    RELAY_GREETING
}

/// 업스트림 스냅샷 전달
///
/// GET /healthcheck
pub async fn healthcheck(State(state): State<RelayState>) -> Result<Response, ApiError> {
    let upstream = state.upstream.as_ref();

    let resp = upstream.fetch_snapshot().await.map_err(|e| {
        warn!("업스트림 {} 조회 실패: {e}", upstream.upstream_url());
        ApiError::HealthData(e.to_string())
    })?;

    let status = StatusCode::from_u16(resp.status).unwrap_or(StatusCode::OK);
    debug!("업스트림 응답 전달: {status}, {}바이트", resp.body.len());

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        resp.body,
    )
        .into_response())
}
