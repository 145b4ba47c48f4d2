//! ys-core: yourstory 클라이언트 공통 코어 라이브러리
//!
//! 봉사활동 매칭/자서전 서비스의 클라이언트가 공유하는 핵심 로직을
//! 담습니다. 화면이나 전송 계층에 의존하지 않는 순수 로직만 둡니다.
//!
//! # 모듈 구조
//!
//! - `auth`: 세션, 토큰 디코딩, 토큰 저장소
//! - `filter`: 봉사 검색 필터 선택 상태와 최종 필터 객체
//! - `error`: 공통 에러 타입

pub mod auth;
pub mod error;
pub mod filter;

pub use error::{Error, Result};
