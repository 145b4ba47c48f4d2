//! HTTP 공통 헬퍼
//!
//! 인증 헤더 부착과 응답 해석을 한곳에 모읍니다. 상태 코드 해석은
//! 순수 함수로 분리해 네트워크 없이 검증합니다.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use ys_core::auth::Session;

use crate::error::{ApiError, Result};

/// 세션에서 검증된 토큰을 받아 Bearer 헤더 부착
///
/// 세션 검증 실패(미로그인, 만료, 변조)는 그대로 전파합니다. 네트워크
/// 호출 전에 실패가 확정되므로 불필요한 왕복이 없습니다.
pub(crate) fn with_auth(session: &Session, req: RequestBuilder) -> Result<RequestBuilder> {
    let token = session.token()?;
    Ok(req.bearer_auth(token))
}

/// 요청 전송 후 JSON 응답 파싱
///
/// 비 2xx 응답은 본문 원문을 담은 [`ApiError::Server`] 가 됩니다.
/// 재시도나 백오프는 하지 않습니다.
pub(crate) async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
    let resp = req.send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    parse_body(interpret(status, body)?)
}

/// 403 을 도메인 에러로 번역하는 전송 (신청/작성 전용)
///
/// 응답 본문 스키마가 확정되지 않은 쓰기 호출에 사용합니다. 성공 본문은
/// [`parse_loose`] 규칙으로 JSON 값이 됩니다.
pub(crate) async fn send_value_guarded(
    req: RequestBuilder,
    forbidden_default: &str,
) -> Result<serde_json::Value> {
    let resp = req.send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Ok(parse_loose(interpret_guarded(status, body, forbidden_default)?))
}

// ─────────────────────────────────────────────────────────────────────────────
// 응답 해석 (순수 함수)
// ─────────────────────────────────────────────────────────────────────────────

/// 상태 코드 해석
///
/// 2xx 면 본문을 그대로 돌려주고, 아니면 [`ApiError::Server`] 입니다.
pub(crate) fn interpret(status: u16, body: String) -> Result<String> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Server {
            status,
            message: body,
        })
    }
}

/// 상태 코드 해석 (403 번역 포함)
///
/// 403 은 서버가 준 `message` 를 그대로, 없으면 호출별 기본 문구를 담은
/// [`ApiError::Forbidden`] 이 됩니다. 그 외는 [`interpret`] 과 같습니다.
pub(crate) fn interpret_guarded(
    status: u16,
    body: String,
    forbidden_default: &str,
) -> Result<String> {
    if status == 403 {
        let message = error_message(&body).unwrap_or_else(|| forbidden_default.to_string());
        return Err(ApiError::Forbidden { message });
    }
    interpret(status, body)
}

/// 에러 응답 본문에서 `message` 필드 추출
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(|s| s.to_string())
}

/// 성공 본문을 타입으로 파싱
pub(crate) fn parse_body<T: DeserializeOwned>(body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(|e| ApiError::Decode {
        message: format!("response body: {}", e),
    })
}

/// 쓰기 응답 본문을 느슨하게 JSON 값으로 변환
///
/// 빈 본문은 `null`, JSON 이 아닌 본문은 문자열 값으로 돌려줍니다.
/// 쓰기 엔드포인트는 본문 없이 200 이나 평문을 돌려주기도 합니다.
fn parse_loose(body: String) -> serde_json::Value {
    if body.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
}
