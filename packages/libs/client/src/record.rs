//! 자서전(봉사 기록) API

use std::sync::Arc;

use ys_core::auth::Session;

use crate::config::Config;
use crate::error::Result;
use crate::http;
use crate::model::{RecordDetail, RecordDraft};
use crate::query;

/// 작성 403 기본 안내 문구 (서버 메시지가 없을 때)
pub const RECORD_FORBIDDEN_MESSAGE: &str =
    "자서전 작성에 실패했습니다. 내용이 너무 길 수 있습니다.";

/// 자서전 API 핸들
pub struct RecordApi {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl RecordApi {
    pub fn new(config: &Config, session: Arc<Session>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            session,
        }
    }

    /// 자서전 작성
    ///
    /// 본문은 JSON 으로 전송하며 길이 제한을 걸지 않습니다. 403 은 서버
    /// 메시지(없으면 [`RECORD_FORBIDDEN_MESSAGE`])를 담은 도메인 에러가
    /// 됩니다.
    pub async fn create(&self, draft: &RecordDraft) -> Result<serde_json::Value> {
        let url = query::parse_url(&format!("{}/work/record", self.base_url))?;
        tracing::debug!("POST {}", url);

        let req = http::with_auth(&self.session, self.http.post(url).json(draft))?;
        http::send_value_guarded(req, RECORD_FORBIDDEN_MESSAGE).await
    }

    /// 조건+날짜로 자서전 단건 조회
    ///
    /// 404 는 "해당 날짜에 기록 없음" 이라는 정상 상태라 `Ok(None)` 이
    /// 됩니다. 그 외 에러 상태는 에러로 전파됩니다.
    pub async fn find_by_condition_and_date(
        &self,
        condition_id: i64,
        date: &str,
    ) -> Result<Option<RecordDetail>> {
        let (token, claims) = self.session.credentials()?;

        let mut url = query::parse_url(&format!(
            "{}/work/record/by-condition-and-date",
            self.base_url
        ))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("conditionId", &condition_id.to_string());
            pairs.append_pair("date", date);
            pairs.append_pair("username", &claims.username);
        }
        tracing::debug!("GET {}", url);

        let resp = self.http.get(url).bearer_auth(token).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        interpret_lookup(status, body)
    }
}

/// 단건 조회 응답 해석 (404 는 기록 없음)
fn interpret_lookup(status: u16, body: String) -> Result<Option<RecordDetail>> {
    if status == 404 {
        return Ok(None);
    }
    http::interpret(status, body).and_then(http::parse_body).map(Some)
}

#[cfg(test)]
mod tests {
    use crate::error::ApiError;

    use super::*;

    #[test]
    fn test_lookup_404_means_absent() {
        let result = interpret_lookup(404, String::new()).unwrap();
        assert_eq!(result, None);

        // 본문이 있어도 404 는 부재로 해석한다
        let result = interpret_lookup(404, r#"{"message":"not found"}"#.to_string()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_lookup_success_parses_detail() {
        let body = r#"{
            "id": 11,
            "conditionId": 3,
            "date": "2025-01-15",
            "title": "시장에 다녀온 날",
            "content": "...",
            "createdAt": "2025-01-15T10:00:00"
        }"#;

        let detail = interpret_lookup(200, body.to_string()).unwrap().unwrap();
        assert_eq!(detail.condition_id, 3);
        assert_eq!(detail.date, "2025-01-15");
        assert_eq!(detail.title.as_deref(), Some("시장에 다녀온 날"));
    }

    #[test]
    fn test_lookup_other_errors_propagate() {
        let err = interpret_lookup(500, "boom".to_string()).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));

        // 단건 조회에는 403 번역이 없다
        let err = interpret_lookup(403, String::new()).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 403, .. }));
    }

    #[test]
    fn test_lookup_garbage_body_is_decode_error() {
        let err = interpret_lookup(200, "not json".to_string()).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_create_403_without_message_uses_default() {
        let err =
            http::interpret_guarded(403, String::new(), RECORD_FORBIDDEN_MESSAGE).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Forbidden { message }
                if message == "자서전 작성에 실패했습니다. 내용이 너무 길 수 있습니다."
        ));
    }
}
