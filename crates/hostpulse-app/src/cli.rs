//! CLI 인자 정의와 설정 덮어쓰기.

use clap::{Args as ClapArgs, Parser, Subcommand};
use hostpulse_core::config::AppConfig;
use std::path::PathBuf;

/// 레코드 DB 파일 이름
pub const DB_FILE_NAME: &str = "hostpulse.db";

/// hostpulse: 호스트 텔레메트리 에이전트 / 릴레이
#[derive(Parser, Debug)]
#[command(name = "hostpulse")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error). RUST_LOG가 우선한다
    #[arg(long, short = 'l', global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// 실행 모드
#[derive(Subcommand, Debug)]
pub enum Command {
    /// 요청마다 호스트 스냅샷을 생성하는 에이전트 서버
    Agent(AgentArgs),
    /// 에이전트 스냅샷을 전달하는 릴레이 서버
    Relay(RelayArgs),
}

/// 에이전트 옵션
#[derive(ClapArgs, Debug)]
pub struct AgentArgs {
    /// 리슨 포트 (기본: 4001)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// 0.0.0.0에 바인드
    #[arg(long)]
    pub allow_external: bool,
}

/// 릴레이 옵션
#[derive(ClapArgs, Debug)]
pub struct RelayArgs {
    /// 리슨 포트 (기본: 3000)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// 0.0.0.0에 바인드
    #[arg(long)]
    pub allow_external: bool,

    /// 에이전트 스냅샷 URL (기본: http://localhost:4001/health)
    #[arg(long, short = 'u')]
    pub upstream: Option<String>,

    /// 레코드 DB 저장 디렉토리
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// 레코드 엔드포인트 비활성화
    #[arg(long)]
    pub no_records: bool,
}

impl Command {
    /// CLI 인자로 설정 덮어쓰기 (지정된 값만)
    pub fn apply(&self, config: &mut AppConfig) {
        match self {
            Command::Agent(agent) => {
                if let Some(port) = agent.port {
                    config.agent.port = port;
                }
                if agent.allow_external {
                    config.agent.allow_external = true;
                }
            }
            Command::Relay(relay) => {
                if let Some(port) = relay.port {
                    config.relay.server.port = port;
                }
                if relay.allow_external {
                    config.relay.server.allow_external = true;
                }
                if let Some(ref url) = relay.upstream {
                    config.relay.upstream_url = url.clone();
                }
                if let Some(ref dir) = relay.data_dir {
                    config.storage.db_path = Some(dir.join(DB_FILE_NAME));
                }
                if relay.no_records {
                    config.relay.records_enabled = false;
                }
            }
        }
    }
}

/// tracing 필터 문자열: hostpulse 크레이트에만 레벨 적용
pub fn log_filter(level: &str) -> String {
    [
        "hostpulse",
        "hostpulse_app",
        "hostpulse_core",
        "hostpulse_monitor",
        "hostpulse_network",
        "hostpulse_storage",
        "hostpulse_web",
        "tower_http",
    ]
    .iter()
    .map(|target| format!("{target}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}
