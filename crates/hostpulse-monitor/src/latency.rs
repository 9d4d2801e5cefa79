//! 지연 시간 프로브.
//!
//! ICMP는 raw 소켓 권한이 필요하므로 기준 호스트로의 TCP 연결 수립
//! 시간을 왕복 지연으로 사용한다. 타임아웃은 호출자(집계기)가 건다.

use hostpulse_core::error::CoreError;
use hostpulse_core::normalize::round_to;
use std::time::Instant;
use tokio::net::TcpStream;
use tracing::debug;

/// `host:port` TCP 연결 시간 측정 (ms, 소수점 2자리)
pub async fn tcp_connect_latency(host: &str, port: u16) -> Result<f64, CoreError> {
    let started = Instant::now();
    let stream = TcpStream::connect((host, port))
        .await
        .map_err(|e| CoreError::Network(format!("{host}:{port} 연결 실패: {e}")))?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    drop(stream);

    debug!("{host}:{port} 지연 시간 {elapsed_ms:.2}ms");
    Ok(round_to(elapsed_ms, 2))
}
