//! 봉사활동 API
//!
//! 목록/상세 조회, 신청, 나의 현황 조회를 담당합니다. 목록과 상세는
//! 읽기 호출이지만 현재 백엔드 동작대로 인증 헤더를 붙입니다.

use std::sync::Arc;

use ys_core::auth::Session;
use ys_core::filter::WorkFilter;

use crate::config::Config;
use crate::error::Result;
use crate::http;
use crate::model::{MyWorkStatus, WorkDetail, WorkSummary};
use crate::query::{self, work_list_url};

/// 신청 403 기본 안내 문구 (서버 메시지가 없을 때)
pub const APPLY_FORBIDDEN_MESSAGE: &str = "권한이 없거나 이미 신청된 봉사활동입니다.";

/// 봉사활동 API 핸들
///
/// 타임아웃이나 재시도는 걸지 않습니다. 단건 대화형 호출 전제입니다.
pub struct WorkApi {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl WorkApi {
    pub fn new(config: &Config, session: Arc<Session>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            session,
        }
    }

    /// 봉사 목록 조회
    ///
    /// 필터 규칙은 [`work_list_url`] 을 따릅니다.
    pub async fn list(&self, filter: &WorkFilter) -> Result<Vec<WorkSummary>> {
        let url = work_list_url(&self.base_url, filter)?;
        tracing::debug!("GET {}", url);

        let req = http::with_auth(&self.session, self.http.get(url))?;
        http::send_json(req).await
    }

    /// 봉사 상세 조회
    pub async fn detail(&self, work_id: i64) -> Result<WorkDetail> {
        let url = query::parse_url(&format!("{}/work/{}", self.base_url, work_id))?;
        tracing::debug!("GET {}", url);

        let req = http::with_auth(&self.session, self.http.get(url))?;
        http::send_json(req).await
    }

    /// 봉사 신청
    ///
    /// 신청자는 토큰 클레임의 `username` 입니다. 403 은 서버 메시지
    /// (없으면 [`APPLY_FORBIDDEN_MESSAGE`])를 담은
    /// [`ApiError::Forbidden`](crate::ApiError::Forbidden) 이 되고,
    /// 그 외 에러는 그대로 전파됩니다. 응답 본문 스키마는 백엔드 계약이
    /// 확정되지 않아 JSON 값 그대로 돌려줍니다.
    pub async fn apply(&self, work_id: i64) -> Result<serde_json::Value> {
        let (token, claims) = self.session.credentials()?;

        let mut url = query::parse_url(&format!("{}/work/{}", self.base_url, work_id))?;
        url.query_pairs_mut().append_pair("username", &claims.username);
        tracing::debug!("POST {}", url);

        let req = self.http.post(url).bearer_auth(token);
        http::send_value_guarded(req, APPLY_FORBIDDEN_MESSAGE).await
    }

    /// 나의 봉사 현황 조회
    pub async fn my_status(&self) -> Result<Vec<MyWorkStatus>> {
        let (token, claims) = self.session.credentials()?;

        let mut url = query::parse_url(&format!("{}/work/my-status", self.base_url))?;
        url.query_pairs_mut().append_pair("username", &claims.username);
        tracing::debug!("GET {}", url);

        let req = self.http.get(url).bearer_auth(token);
        http::send_json(req).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ApiError;

    use super::*;

    #[test]
    fn test_apply_403_without_message_uses_default() {
        let err = http::interpret_guarded(403, String::new(), APPLY_FORBIDDEN_MESSAGE).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Forbidden { message } if message == "권한이 없거나 이미 신청된 봉사활동입니다."
        ));
    }
}
