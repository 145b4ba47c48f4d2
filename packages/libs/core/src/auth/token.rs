//! 액세스 토큰 디코딩
//!
//! `header.payload.signature` 형태의 토큰에서 페이로드 세그먼트만
//! base64url 디코딩해 클레임을 꺼냅니다. 서명은 검증하지 않습니다.

use base64::{engine::general_purpose, Engine as _};

use crate::error::{Error, Result};

use super::claims::Claims;

/// 토큰 문자열에서 클레임 디코딩
///
/// # 절차
///
/// 1. `.` 으로 분리해 두 번째(페이로드) 세그먼트를 취한다
/// 2. base64url 디코딩 (패딩 유무 모두 허용)
/// 3. JSON 파싱 → [`Claims`]
///
/// 어느 단계에서든 실패하면 [`Error::InvalidToken`] 을 반환합니다.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            return Err(Error::InvalidToken {
                reason: "missing payload segment".to_string(),
            })
        }
    };

    let bytes = decode_base64url(payload).ok_or_else(|| Error::InvalidToken {
        reason: "payload is not valid base64url".to_string(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| Error::InvalidToken {
        reason: format!("payload is not a claims object: {}", e),
    })
}

/// base64url 디코딩 (패딩 없는 형식 우선, 패딩 형식도 허용)
fn decode_base64url(segment: &str) -> Option<Vec<u8>> {
    if let Ok(bytes) = general_purpose::URL_SAFE_NO_PAD.decode(segment) {
        return Some(bytes);
    }
    general_purpose::URL_SAFE.decode(segment).ok()
}
