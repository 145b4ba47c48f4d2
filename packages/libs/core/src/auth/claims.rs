//! 액세스 토큰 클레임

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 액세스 토큰 페이로드에서 읽어낸 클레임
///
/// 서명 검증 없이 페이로드만 디코딩한 결과입니다. 클라이언트는 만료
/// 판정과 사용자 식별에만 사용하고, 권한 판단은 서버 응답에 따릅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 이름 (신청/기록 조회 시 쿼리 파라미터로 전달)
    pub username: String,

    /// 만료 시각 (epoch 초)
    pub exp: i64,

    /// 발급 시각 (epoch 초)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// 주어진 시각(epoch 밀리초) 기준 만료 여부
    ///
    /// `exp * 1000 < now_millis` 일 때만 만료입니다. 경계 시각
    /// (`now_millis == exp * 1000`)은 아직 유효한 것으로 봅니다.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        self.exp.saturating_mul(1000) < now_millis
    }

    /// 현재 시각 기준 만료 여부
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }
}
