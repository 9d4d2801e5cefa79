//! API 라우트 정의.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::{AgentState, RelayState};

/// 에이전트 라우트
pub fn agent_routes() -> Router<AgentState> {
    Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::get_health))
}

/// 릴레이 라우트
///
/// 레코드 저장소가 연결된 경우에만 `/api/records`를 노출한다.
pub fn relay_routes(with_records: bool) -> Router<RelayState> {
    let router = Router::new()
        .route("/", get(handlers::relay::index))
        .route("/healthcheck", get(handlers::relay::healthcheck));

    if !with_records {
        return router;
    }

    router
        .route("/api/records", post(handlers::records::create_record))
        .route(
            "/api/records/{server_id}",
            get(handlers::records::list_records),
        )
}
