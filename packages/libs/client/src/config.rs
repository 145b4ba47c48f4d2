//! 클라이언트 설정

use std::env;

use crate::error::{ApiError, Result};

/// API 서버 주소 환경변수
pub const BASE_URL_ENV: &str = "YS_BASE_URL";

/// 클라이언트 설정
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// 주어진 base URL 로 설정 생성
    ///
    /// 후행 `/` 는 제거해 보관합니다. 경로를 이어 붙일 때 `//` 가 생기지
    /// 않게 하기 위함입니다.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// 환경변수(`YS_BASE_URL`)에서 설정 로드
    pub fn from_env() -> Result<Self> {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err(ApiError::Config {
                message: format!("{} is not set", BASE_URL_ENV),
            }),
        }
    }

    /// 백엔드 base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
