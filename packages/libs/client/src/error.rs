//! ys-client 에러 타입

use thiserror::Error;

/// ys-client 공통 Result 타입
pub type Result<T> = std::result::Result<T, ApiError>;

/// API 호출 에러
#[derive(Debug, Error)]
pub enum ApiError {
    /// 인증 실패
    ///
    /// 세션의 토큰 검증 에러(미로그인, 만료, 변조)를 감싸지 않고 그대로
    /// 통과시킵니다. 호출부가 전송 계층 에러와 구분해 재로그인 흐름으로
    /// 보낼 수 있어야 합니다.
    #[error(transparent)]
    Auth(#[from] ys_core::Error),

    /// 403 응답 (서버 메시지 또는 호출별 기본 안내 문구)
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// 그 외 비 2xx 응답 (본문 원문 유지)
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// 전송 실패
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// 응답 본문 파싱 실패
    #[error("decode: {message}")]
    Decode { message: String },

    /// 설정 오류
    #[error("config: {message}")]
    Config { message: String },
}
