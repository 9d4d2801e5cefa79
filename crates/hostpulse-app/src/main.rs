//! # hostpulse-app
//!
//! hostpulse 바이너리 진입점.
//! CLI 파싱, 설정 로드, DI 와이어링, 라이프사이클 관리.

mod cli;
mod lifecycle;
mod wiring;

use anyhow::{anyhow, Result};
use clap::Parser;
use hostpulse_core::config::AppConfig;
use hostpulse_core::config_manager::ConfigManager;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::lifecycle::LifecycleManager;

/// 설정 로드: 파일을 읽지 못하면 기본 설정으로 계속 진행
fn load_config(path: Option<&Path>) -> AppConfig {
    let manager = match path {
        Some(p) => ConfigManager::with_path(p.to_path_buf()),
        None => ConfigManager::new(),
    };

    match manager {
        Ok(manager) => {
            info!("설정 파일: {}", manager.config_path().display());
            manager.get()
        }
        Err(e) => {
            warn!("설정 로드 실패, 기본 설정 사용: {e}");
            AppConfig::default_config()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = cli::log_filter(&args.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    let mut config = load_config(args.config.as_deref());
    args.command.apply(&mut config);

    let server = match &args.command {
        Command::Agent(_) => {
            info!("hostpulse 에이전트 시작 (v{})", env!("CARGO_PKG_VERSION"));
            wiring::build_agent(&config)
        }
        Command::Relay(_) => {
            info!("hostpulse 릴레이 시작 (v{})", env!("CARGO_PKG_VERSION"));
            wiring::build_relay(&config)?
        }
    };

    let lifecycle = LifecycleManager::new();
    let mut server_task = tokio::spawn(server.run(lifecycle.subscribe()));

    tokio::select! {
        // 바인드 실패 등으로 서버가 먼저 끝난 경우
        joined = &mut server_task => {
            return match joined {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => {
                    error!("서버 실행 실패: {e}");
                    Err(e.into())
                }
                Err(e) => Err(anyhow!("서버 태스크 조인 실패: {e}")),
            };
        }
        signal = lifecycle.wait_for_signal() => {
            if let Err(e) = signal {
                warn!("시그널 핸들러 등록 실패, 서버 종료까지 대기: {e}");
            }
        }
    }

    server_task
        .await
        .map_err(|e| anyhow!("서버 태스크 조인 실패: {e}"))??;

    info!("hostpulse 종료");
    Ok(())
}
