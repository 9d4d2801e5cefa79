//! 에이전트 → 릴레이 E2E 통합 테스트.
//!
//! 고정값 텔레메트리 소스로 에이전트를 띄우고, 실제 HTTP 클라이언트를 쓰는
//! 릴레이를 그 앞에 연결해 전달/실패 경로를 검증한다.

use async_trait::async_trait;
use hostpulse_core::aggregator::SnapshotAggregator;
use hostpulse_core::config::ServerConfig;
use hostpulse_core::error::{CoreError, SourceKind};
use hostpulse_core::models::snapshot::Snapshot;
use hostpulse_core::models::telemetry::{
    CpuLoad, DiskDevice, InterfaceConfig, InterfaceStats, MemoryReading, ProcessEntry,
    ProcessTable, TimeReading,
};
use hostpulse_core::ports::storage::RecordStorage;
use hostpulse_core::ports::telemetry::TelemetrySource;
use hostpulse_network::HttpSnapshotUpstream;
use hostpulse_storage::SqliteRecordStorage;
use hostpulse_web::WebServer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// 고정값 소스: `fail`로 지정한 소스만 실패
struct FixtureSource {
    fail: Option<SourceKind>,
}

impl FixtureSource {
    fn check(&self, kind: SourceKind) -> Result<(), CoreError> {
        if self.fail == Some(kind) {
            return Err(CoreError::Source(format!("{kind} 사용 불가")));
        }
        Ok(())
    }
}

#[async_trait]
impl TelemetrySource for FixtureSource {
    async fn current_load(&self) -> Result<CpuLoad, CoreError> {
        self.check(SourceKind::CurrentLoad)?;
        Ok(CpuLoad {
            current_load: 42.424,
            user_load: 30.0,
            system_load: 10.0,
            irq_load: 2.424,
            cores: vec![40.0, 44.848],
        })
    }

    async fn memory_info(&self) -> Result<MemoryReading, CoreError> {
        self.check(SourceKind::MemoryInfo)?;
        Ok(MemoryReading {
            total: 8_000_000_000,
            used: 4_000_000_000,
            free: 4_000_000_000,
        })
    }

    async fn system_time(&self) -> Result<TimeReading, CoreError> {
        self.check(SourceKind::SystemTime)?;
        Ok(TimeReading { uptime_secs: 3_600 })
    }

    async fn disk_layout(&self) -> Result<Vec<DiskDevice>, CoreError> {
        self.check(SourceKind::DiskLayout)?;
        Ok(vec![DiskDevice {
            device: "/dev/nvme0n1".to_string(),
            kind: "SSD".to_string(),
            name: "/".to_string(),
            smart_status: None,
            size_bytes: 512_110_190_592,
        }])
    }

    async fn process_list(&self) -> Result<ProcessTable, CoreError> {
        self.check(SourceKind::ProcessList)?;
        let list: Vec<ProcessEntry> = [5.0, 80.0, 1.0, 20.0, 3.0, 60.0, 0.5]
            .iter()
            .enumerate()
            .map(|(i, cpu)| ProcessEntry {
                pid: 100 + i as u32,
                name: format!("svc-{i}"),
                cpu_percent: *cpu,
                memory_bytes: 1_048_576,
            })
            .collect();
        Ok(ProcessTable {
            all: list.len() as u32,
            running: 2,
            blocked: 0,
            list,
        })
    }

    async fn network_stats(&self) -> Result<Vec<InterfaceStats>, CoreError> {
        self.check(SourceKind::NetworkStats)?;
        Ok(vec![InterfaceStats {
            iface: "eth0".to_string(),
            rx_bytes: 123_456,
            tx_bytes: 654_321,
            rx_sec: 6_000_000.0,
            tx_sec: 100_000.0,
        }])
    }

    async fn network_interfaces(&self) -> Result<Vec<InterfaceConfig>, CoreError> {
        self.check(SourceKind::NetworkInterfaces)?;
        Ok(vec![InterfaceConfig {
            iface: "eth0".to_string(),
            ip: "10.0.0.2".to_string(),
            mac: "02:42:ac:11:00:02".to_string(),
            speed_mbps: Some(1000),
        }])
    }

    async fn ping_latency(&self) -> Result<f64, CoreError> {
        self.check(SourceKind::PingLatency)?;
        Ok(3.25)
    }
}

/// 실행 중인 서버 핸들
struct Running {
    addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl Running {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        self.shutdown.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("서버 종료 타임아웃")
            .unwrap()
            .unwrap();
    }
}

fn local_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        allow_external: false,
    }
}

async fn start(server: WebServer) -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, rx) = watch::channel(false);
    let task = tokio::spawn(server.serve(listener, rx));
    Running {
        addr,
        shutdown,
        task,
    }
}

async fn start_agent(fail: Option<SourceKind>) -> Running {
    let aggregator = SnapshotAggregator::new(
        Arc::new(FixtureSource { fail }),
        Duration::from_secs(2),
        Duration::from_millis(500),
    );
    start(WebServer::agent(local_config(), Arc::new(aggregator))).await
}

async fn start_relay(upstream_url: &str, records: Option<Arc<dyn RecordStorage>>) -> Running {
    let upstream =
        Arc::new(HttpSnapshotUpstream::new(upstream_url, Duration::from_secs(2)).unwrap());
    start(WebServer::relay(local_config(), upstream, records)).await
}

#[tokio::test]
async fn relay_forwards_agent_snapshot() {
    let agent = start_agent(None).await;
    let relay = start_relay(&agent.url("/health"), None).await;

    let response = reqwest::get(relay.url("/healthcheck")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let snapshot: Snapshot = response.json().await.unwrap();
    assert_eq!(snapshot.memory.total_mb, 7629);
    assert_eq!(snapshot.memory.usage_percent, 50.01);
    assert_eq!(snapshot.cpu.overall, 42.42);
    assert_eq!(snapshot.cpu_cores, vec![40.0, 44.85]);
    assert_eq!(snapshot.uptime_seconds, 3_600);
    assert_eq!(snapshot.system_metrics.disk[0].health, "unknown");
    assert_eq!(snapshot.system_metrics.disk[0].size_gb, 512.11);

    let top: Vec<u32> = snapshot
        .system_metrics
        .processes
        .top_processes
        .iter()
        .map(|p| p.pid)
        .collect();
    assert_eq!(top, vec![101, 105, 103, 100, 104]);

    let traffic = &snapshot.functional_metrics.traffic_analysis[0];
    assert!(traffic.is_spike);
    assert_eq!(traffic.throughput_mbps, 48.8);
    assert_eq!(snapshot.functional_metrics.latency_ms, 3.25);

    relay.stop().await;
    agent.stop().await;
}

#[tokio::test]
async fn relay_matches_agent_shape() {
    let agent = start_agent(None).await;
    let relay = start_relay(&agent.url("/health"), None).await;

    let direct: serde_json::Value = reqwest::get(agent.url("/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let relayed: serde_json::Value = reqwest::get(relay.url("/healthcheck"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // 타임스탬프만 다르고 나머지는 동일
    let strip = |mut v: serde_json::Value| {
        v.as_object_mut().unwrap().remove("timestamp");
        v
    };
    assert_eq!(strip(direct), strip(relayed));

    relay.stop().await;
    agent.stop().await;
}

#[tokio::test]
async fn degraded_latency_still_serves() {
    let agent = start_agent(Some(SourceKind::PingLatency)).await;

    let json: serde_json::Value = reqwest::get(agent.url("/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["functionalMetrics"]["latencyMs"], -1.0);
    assert_eq!(json["memory"]["totalMB"], 7629);

    agent.stop().await;
}

#[tokio::test]
async fn agent_failure_propagates_through_relay() {
    let agent = start_agent(Some(SourceKind::DiskLayout)).await;
    let relay = start_relay(&agent.url("/health"), None).await;

    let direct = reqwest::get(agent.url("/health")).await.unwrap();
    assert_eq!(direct.status(), 500);
    let direct: serde_json::Value = direct.json().await.unwrap();
    assert_eq!(direct["error"], "Failed to fetch system health data");
    assert!(direct["details"].as_str().unwrap().contains("diskLayout"));

    let relayed = reqwest::get(relay.url("/healthcheck")).await.unwrap();
    assert_eq!(relayed.status(), 500);
    let relayed: serde_json::Value = relayed.json().await.unwrap();
    assert_eq!(relayed["error"], "Failed to fetch system health data");
    assert!(relayed["details"].as_str().unwrap().contains("500"));

    relay.stop().await;
    agent.stop().await;
}

#[tokio::test]
async fn unreachable_agent_yields_envelope() {
    let dead_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let relay = start_relay(&format!("http://127.0.0.1:{dead_port}/health"), None).await;

    let response = reqwest::get(relay.url("/healthcheck")).await.unwrap();
    assert_eq!(response.status(), 500);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Failed to fetch system health data");
    assert!(!json["details"].as_str().unwrap().is_empty());

    relay.stop().await;
}

#[tokio::test]
async fn relay_records_persist_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("hostpulse.db");
    let storage: Arc<dyn RecordStorage> = Arc::new(SqliteRecordStorage::open(&db_path).unwrap());

    let agent = start_agent(None).await;
    let relay = start_relay(&agent.url("/health"), Some(storage)).await;
    let client = reqwest::Client::new();

    for data in ["boot", "deploy"] {
        let response = client
            .post(relay.url("/api/records"))
            .json(&serde_json::json!({ "server_id": "web-01", "data": data }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let bad = client
        .post(relay.url("/api/records"))
        .json(&serde_json::json!({ "server_id": "", "data": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), 400);

    let listed: Vec<serde_json::Value> = client
        .get(relay.url("/api/records/web-01"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data: Vec<&str> = listed.iter().map(|r| r["data"].as_str().unwrap()).collect();
    assert_eq!(data, vec!["boot", "deploy"]);

    relay.stop().await;
    agent.stop().await;

    // 재시작 후에도 유지
    let reopened = SqliteRecordStorage::open(&db_path).unwrap();
    assert_eq!(reopened.list_by_owner("web-01").await.unwrap().len(), 2);
}
