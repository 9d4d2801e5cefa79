//! # hostpulse-network
//!
//! 릴레이의 아웃바운드 HTTP 어댑터.
//! 설정된 에이전트 URL에서 스냅샷을 가져와 본문을 그대로 넘긴다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use hostpulse_network::http_client::HttpSnapshotUpstream;
//!
//! let upstream = HttpSnapshotUpstream::new("http://localhost:4001/health", timeout)?;
//! let resp = upstream.fetch_snapshot().await?;
//! ```

pub mod http_client;

pub use http_client::HttpSnapshotUpstream;
