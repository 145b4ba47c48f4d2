//! ys-core 공통 에러 타입

use thiserror::Error;

/// ys-core 공통 Result 타입
pub type Result<T> = std::result::Result<T, Error>;

/// ys-core 공통 에러
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Auth Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 저장된 토큰 없음 (로그인 필요)
    #[error("not authenticated")]
    NotAuthenticated,

    /// 토큰 만료
    #[error("token expired")]
    TokenExpired,

    /// 토큰 형식 오류 (디코딩/파싱 실패)
    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Storage/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 자격증명 저장소 입출력 실패
    #[error("storage error: {message}")]
    Storage { message: String },

    /// JSON 직렬화/역직렬화 실패
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 에러 코드 반환 (호출부 분기 및 로깅용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotAuthenticated => "NOT_AUTHENTICATED",
            Error::TokenExpired => "TOKEN_EXPIRED",
            Error::InvalidToken { .. } => "INVALID_TOKEN",
            Error::Storage { .. } => "STORAGE_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
