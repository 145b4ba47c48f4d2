//! ys-client: yourstory REST API 클라이언트
//!
//! 외부 소유 백엔드(`/work/*`)에 대한 토큰 인증 HTTP 호출을 담당합니다.
//! 토큰 검증과 필터 상태는 `ys-core` 가 맡고, 이 크레이트는 요청 구성과
//! 응답 해석만 합니다.
//!
//! # 사용 예
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use ys_client::{Config, RecordApi, WorkApi};
//! use ys_core::auth::{FileTokenStore, Session};
//! use ys_core::filter::WorkFilter;
//!
//! let config = Config::from_env()?;
//! let session = Arc::new(Session::new(FileTokenStore::new()?));
//!
//! let work = WorkApi::new(&config, session.clone());
//! let list = work.list(&WorkFilter::default()).await?;
//!
//! let record = RecordApi::new(&config, session);
//! let detail = record.find_by_condition_and_date(3, "2025-01-15").await?;
//! ```

pub mod config;
pub mod error;
mod http;
pub mod model;
pub mod query;
pub mod record;
pub mod work;

pub use config::Config;
pub use error::{ApiError, Result};
pub use record::{RecordApi, RECORD_FORBIDDEN_MESSAGE};
pub use work::{WorkApi, APPLY_FORBIDDEN_MESSAGE};
