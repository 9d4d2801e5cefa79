//! API 에러 처리.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// 스냅샷 조회/전달 실패 시 고정 에러 메시지
pub const HEALTH_DATA_ERROR: &str = "Failed to fetch system health data";

/// API 에러
#[derive(Debug, Error)]
pub enum ApiError {
    /// 스냅샷 생성 또는 업스트림 조회 실패 (원인 메시지 포함)
    #[error("{HEALTH_DATA_ERROR}: {0}")]
    HealthData(String),

    /// 내부 서버 오류
    #[error("내부 서버 오류: {0}")]
    Internal(String),

    /// 잘못된 요청
    #[error("잘못된 요청: {0}")]
    BadRequest(String),
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// 에러 메시지
    pub error: String,
    /// 원인 상세
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::HealthData(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: HEALTH_DATA_ERROR.to_string(),
                    details: Some(details),
                },
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<hostpulse_core::error::CoreError> for ApiError {
    fn from(err: hostpulse_core::error::CoreError) -> Self {
        match err {
            hostpulse_core::error::CoreError::Validation { field, message } => {
                ApiError::BadRequest(format!("{field}: {message}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}
