//! # hostpulse-web
//!
//! Axum 기반 HTTP 서버.
//!
//! ## 기능
//! - 에이전트: 요청마다 호스트 스냅샷 생성 (`GET /health`)
//! - 릴레이: 에이전트 스냅샷을 그대로 전달 (`GET /healthcheck`)
//! - 릴레이: 소유자별 불투명 레코드 저장/조회 (`/api/records`)

pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use hostpulse_core::aggregator::SnapshotAggregator;
use hostpulse_core::config::ServerConfig;
use hostpulse_core::ports::relay::SnapshotUpstream;
use hostpulse_core::ports::storage::RecordStorage;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// 에이전트 애플리케이션 상태
#[derive(Clone)]
pub struct AgentState {
    /// 스냅샷 집계기
    pub aggregator: Arc<SnapshotAggregator>,
}

/// 릴레이 애플리케이션 상태
#[derive(Clone)]
pub struct RelayState {
    /// 업스트림(에이전트) 클라이언트
    pub upstream: Arc<dyn SnapshotUpstream>,
    /// 레코드 저장소 (None이면 레코드 엔드포인트 비활성화)
    pub records: Option<Arc<dyn RecordStorage>>,
}

/// CORS + 접근 로그 레이어 적용
fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// 에이전트 라우터 (상태 주입 완료)
pub fn agent_router(state: AgentState) -> Router {
    with_layers(routes::agent_routes().with_state(state))
}

/// 릴레이 라우터 (상태 주입 완료)
pub fn relay_router(state: RelayState) -> Router {
    let with_records = state.records.is_some();
    with_layers(routes::relay_routes(with_records).with_state(state))
}

/// HTTP 서버
///
/// 전역 리스너 대신 설정과 협력 객체를 주입받아 만드는 명시적 인스턴스.
pub struct WebServer {
    name: &'static str,
    config: ServerConfig,
    router: Router,
}

impl WebServer {
    /// 에이전트 서버 생성
    pub fn agent(config: ServerConfig, aggregator: Arc<SnapshotAggregator>) -> Self {
        Self {
            name: "agent",
            config,
            router: agent_router(AgentState { aggregator }),
        }
    }

    /// 릴레이 서버 생성
    pub fn relay(
        config: ServerConfig,
        upstream: Arc<dyn SnapshotUpstream>,
        records: Option<Arc<dyn RecordStorage>>,
    ) -> Self {
        Self {
            name: "relay",
            config,
            router: relay_router(RelayState { upstream, records }),
        }
    }

    /// 바인드 주소
    pub fn addr(&self) -> Result<SocketAddr, std::io::Error> {
        format!("{}:{}", self.config.host(), self.config.port)
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
    }

    /// 서버 실행
    ///
    /// 설정된 포트에 바인드한다. 포트가 사용 중이면 다른 포트를 시도하지 않고
    /// 에러를 반환한다.
    ///
    /// # Arguments
    /// * `shutdown_rx` - 종료 신호 수신 채널
    pub async fn run(self, shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let addr = self.addr()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_rx).await
    }

    /// 이미 바인드된 리스너로 서버 실행
    pub async fn serve(
        self,
        listener: TcpListener,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> Result<(), std::io::Error> {
        let name = self.name;
        info!("{name} 서버 시작: http://{}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                loop {
                    if *shutdown_rx.borrow() {
                        info!("{name} 서버 종료 신호 수신");
                        break;
                    }
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
            })
            .await?;

        info!("{name} 서버 종료");
        Ok(())
    }
}
