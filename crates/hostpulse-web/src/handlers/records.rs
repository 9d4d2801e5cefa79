//! 레코드 API 핸들러.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hostpulse_core::models::record::StoredRecord;
use hostpulse_core::ports::storage::RecordStorage;
use serde::Deserialize;
use serde_json::value::RawValue;
use std::sync::Arc;

use crate::error::ApiError;
use crate::RelayState;

/// 레코드 생성 요청 DTO
#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    /// 소유자(서버) ID
    pub server_id: String,
    /// 페이로드: JSON 문자열이면 내용을, 그 외 JSON이면 원문 텍스트를 저장
    pub data: Box<RawValue>,
}

impl CreateRecordRequest {
    /// 저장할 페이로드 문자열
    pub fn payload(&self) -> Result<String, ApiError> {
        let raw = self.data.get();
        if raw.starts_with('"') {
            serde_json::from_str::<String>(raw)
                .map_err(|e| ApiError::BadRequest(format!("data 파싱 실패: {e}")))
        } else {
            Ok(raw.to_string())
        }
    }
}

fn record_store(state: &RelayState) -> Result<&Arc<dyn RecordStorage>, ApiError> {
    state
        .records
        .as_ref()
        .ok_or_else(|| ApiError::Internal("레코드 저장소 비활성화".to_string()))
}

/// 레코드 저장
///
/// POST /api/records
///
/// 본문 파싱 실패도 400 에러 본문으로 응답한다.
pub async fn create_record(
    State(state): State<RelayState>,
    body: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredRecord>), ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if req.server_id.trim().is_empty() {
        return Err(ApiError::BadRequest("server_id는 비어 있을 수 없음".to_string()));
    }

    let payload = req.payload()?;
    let record = record_store(&state)?.store(&req.server_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// 소유자별 레코드 목록 (저장 순서)
///
/// GET /api/records/{server_id}
pub async fn list_records(
    State(state): State<RelayState>,
    Path(server_id): Path<String>,
) -> Result<Json<Vec<StoredRecord>>, ApiError> {
    let records = record_store(&state)?.list_by_owner(&server_id).await?;
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> CreateRecordRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn string_payload_is_unquoted() {
        let req = request(r#"{"server_id":"web-01","data":"cpu=12\n"}"#);
        assert_eq!(req.payload().unwrap(), "cpu=12\n");
    }

    #[test]
    fn json_payload_keeps_raw_text() {
        let req = request(r#"{"server_id":"web-01","data":{"b": 1,  "a":[true]}}"#);
        assert_eq!(req.payload().unwrap(), r#"{"b": 1,  "a":[true]}"#);
    }
}
