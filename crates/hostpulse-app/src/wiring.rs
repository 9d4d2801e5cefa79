//! DI 와이어링.
//!
//! 설정 → 어댑터 생성 → 서버 조립.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use hostpulse_core::aggregator::SnapshotAggregator;
use hostpulse_core::config::AppConfig;
use hostpulse_core::ports::storage::RecordStorage;
use hostpulse_core::ports::telemetry::TelemetrySource;
use hostpulse_monitor::SysInfoTelemetry;
use hostpulse_network::HttpSnapshotUpstream;
use hostpulse_storage::SqliteRecordStorage;
use hostpulse_web::WebServer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::cli::DB_FILE_NAME;

/// 레코드 DB 경로 결정 (설정값 또는 플랫폼별 기본 경로)
///
/// # 플랫폼별 기본 경로:
/// - macOS: `~/Library/Application Support/dev.hostpulse.relay/hostpulse.db`
/// - Windows: `%APPDATA%\hostpulse\relay\data\hostpulse.db`
/// - Linux: `~/.local/share/relay/hostpulse.db`
pub fn resolve_db_path(config: &AppConfig) -> PathBuf {
    config
        .storage
        .db_path
        .clone()
        .or_else(|| {
            ProjectDirs::from("dev", "hostpulse", "relay").map(|p| p.data_dir().join(DB_FILE_NAME))
        })
        .unwrap_or_else(|| PathBuf::from(".").join(DB_FILE_NAME))
}

/// 에이전트 서버 조립
pub fn build_agent(config: &AppConfig) -> WebServer {
    let source: Arc<dyn TelemetrySource> = Arc::new(SysInfoTelemetry::from_config(&config.monitor));
    let aggregator = Arc::new(SnapshotAggregator::from_config(source, &config.monitor));

    info!(
        "에이전트 구성: 소스 타임아웃 {}ms, 지연 프로브 {}:{}",
        config.monitor.source_timeout_ms, config.monitor.latency_host, config.monitor.latency_port
    );
    WebServer::agent(config.agent.clone(), aggregator)
}

/// 릴레이 서버 조립
pub fn build_relay(config: &AppConfig) -> Result<WebServer> {
    let upstream = Arc::new(
        HttpSnapshotUpstream::new(&config.relay.upstream_url, config.request_timeout())
            .context("업스트림 클라이언트 생성 실패")?,
    );
    info!("릴레이 업스트림: {}", config.relay.upstream_url);

    let records: Option<Arc<dyn RecordStorage>> = if config.relay.records_enabled {
        let path = resolve_db_path(config);
        let storage = SqliteRecordStorage::open(&path)
            .with_context(|| format!("레코드 저장소 열기 실패: {}", path.display()))?;
        Some(Arc::new(storage))
    } else {
        info!("레코드 엔드포인트 비활성화");
        None
    };

    Ok(WebServer::relay(config.relay.server.clone(), upstream, records))
}
