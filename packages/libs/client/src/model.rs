//! 엔드포인트별 요청/응답 스키마
//!
//! 서비스 경계에서 응답을 명시적 타입으로 파싱합니다. 백엔드가 외부
//! 소유라서 모르는 필드는 무시하고, 빠질 수 있는 필드는 `Option`
//! 으로 둡니다. 날짜는 `YYYY-MM-DD` 문자열 그대로 다룹니다.

use serde::{Deserialize, Serialize};

/// 봉사 목록 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub recruitment_status: Option<String>,
    #[serde(default)]
    pub day_of_week: Option<String>,
}

/// 봉사 상세
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDetail {
    pub id: i64,
    pub title: String,
    /// 봉사 기간
    #[serde(default)]
    pub period: Option<String>,
    /// 봉사 장소
    #[serde(default)]
    pub place: Option<String>,
    /// 봉사 요일
    #[serde(default)]
    pub day_of_week: Option<String>,
    /// 봉사 시간
    #[serde(default)]
    pub time: Option<String>,
    /// 모집 기관
    #[serde(default)]
    pub institution: Option<String>,
    /// 모집 인원
    #[serde(default)]
    pub capacity: Option<i64>,
    /// 담당자
    #[serde(default)]
    pub manager: Option<String>,
    /// 기타사항
    #[serde(default)]
    pub note: Option<String>,
    /// 모집 상태
    #[serde(default)]
    pub recruitment_status: Option<String>,
}

/// 나의 봉사 현황 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyWorkStatus {
    pub work_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub applied_at: Option<String>,
}

/// 자서전 작성 요청 본문
///
/// `content` 에는 길이 제한을 두지 않습니다. 길이 초과 판정은 서버가
/// 403 으로 알려줍니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub condition_id: i64,
    pub date: String,
    pub title: String,
    pub content: String,
}

/// 자서전 상세
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetail {
    #[serde(default)]
    pub id: Option<i64>,
    pub condition_id: i64,
    pub date: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_summary_parses_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "어르신 말벗 봉사",
            "region": "남일면",
            "recruitmentStatus": "모집중",
            "dayOfWeek": "평일",
            "extraField": "무시"
        }"#;

        let summary: WorkSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.recruitment_status.as_deref(), Some("모집중"));
        assert_eq!(summary.day_of_week.as_deref(), Some("평일"));
    }

    #[test]
    fn test_work_detail_missing_fields_default_to_none() {
        let json = r#"{ "id": 1, "title": "봉사" }"#;

        let detail: WorkDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.period, None);
        assert_eq!(detail.capacity, None);
        assert_eq!(detail.manager, None);
    }

    #[test]
    fn test_record_draft_serializes_camel_case() {
        let draft = RecordDraft {
            condition_id: 3,
            date: "2025-01-15".to_string(),
            title: "제목".to_string(),
            content: "내용".to_string(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["conditionId"], 3);
        assert_eq!(json["date"], "2025-01-15");
        assert!(json.get("condition_id").is_none());
    }
}
