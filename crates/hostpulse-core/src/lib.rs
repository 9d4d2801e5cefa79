//! # hostpulse-core
//!
//! hostpulse 도메인 모델, 포트(trait) 정의, 에러 타입, 스냅샷 집계 로직.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 텔레메트리 측정값, 스냅샷, 저장 레코드 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`aggregator`] — 소스 팬아웃 + 스냅샷 조립
//! - [`normalize`] / [`analysis`] — 단위 정규화, 트래픽/프로세스 지표 도출 (순수 함수)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod aggregator;
pub mod analysis;
pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod normalize;
pub mod ports;
