//! 봉사 검색 필터
//!
//! 필터 화면이 들고 있는 체크박스 선택 상태와, 검색 시 목록 조회에
//! 넘기는 최종 필터 객체입니다. 렌더링은 호스트의 몫이고 여기에는
//! 상태 전이 규칙만 둡니다.

/// 모든 값을 뜻하는 선택지
pub const ALL: &str = "전체";

/// 필터 카테고리
///
/// 세 카테고리는 서로 독립적으로 조합됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    /// 봉사 지역(센터)
    Region,
    /// 모집 상태
    Status,
    /// 요일
    Day,
}

/// 체크박스 선택 상태
///
/// 카테고리마다 선택된 값 목록을 유지합니다.
///
/// # 전이 규칙
///
/// - `전체` 토글: 해당 카테고리를 `[전체]` 하나로 바꾸고, 이미 전체
///   선택 상태였다면 빈 목록으로 되돌립니다.
/// - 개별 값 토글: 먼저 `전체` 를 제거한 뒤 값을 넣거나 뺍니다.
///   같은 값을 두 번 토글하면 원래대로 돌아옵니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    region: Vec<String>,
    status: Vec<String>,
    day: Vec<String>,
}

impl FilterSelection {
    /// 아무것도 선택되지 않은 상태
    pub fn new() -> Self {
        Self::default()
    }

    /// 값 토글
    pub fn toggle(&mut self, category: FilterCategory, value: &str) {
        let selected = self.selected_mut(category);
        if value == ALL {
            if selected.iter().any(|v| v == ALL) {
                selected.clear();
            } else {
                selected.clear();
                selected.push(ALL.to_string());
            }
        } else {
            selected.retain(|v| v != ALL);
            if let Some(pos) = selected.iter().position(|v| v == value) {
                selected.remove(pos);
            } else {
                selected.push(value.to_string());
            }
        }
    }

    /// 선택 여부 (체크박스 표시용)
    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.selected(category).iter().any(|v| v == value)
    }

    /// 카테고리의 현재 선택 목록
    pub fn selected(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Region => &self.region,
            FilterCategory::Status => &self.status,
            FilterCategory::Day => &self.day,
        }
    }

    /// 초기화 (세 카테고리 모두 빈 목록)
    pub fn reset(&mut self) {
        self.region.clear();
        self.status.clear();
        self.day.clear();
    }

    /// 검색 확정 — 최종 필터 객체 생성
    ///
    /// 빈 선택과 `전체` 선택은 제약 없음(`None`)으로, 개별 선택은
    /// 쉼표로 이어 붙인 단일 값으로 내보냅니다.
    pub fn finish(&self) -> WorkFilter {
        WorkFilter {
            regions: finalize(&self.region),
            recruitment_status: finalize(&self.status),
            day_of_week: finalize(&self.day),
        }
    }

    fn selected_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Region => &mut self.region,
            FilterCategory::Status => &mut self.status,
            FilterCategory::Day => &mut self.day,
        }
    }
}

/// 선택 목록 → 쿼리 값
fn finalize(selected: &[String]) -> Option<String> {
    if selected.is_empty() || selected.iter().any(|v| v == ALL) {
        return None;
    }
    Some(selected.join(","))
}

/// 봉사 목록 조회 필터
///
/// `None` 인 필드는 쿼리 파라미터를 만들지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkFilter {
    /// 봉사 지역(센터), 쿼리 키 `regions`
    pub regions: Option<String>,
    /// 모집 상태, 쿼리 키 `recruitmentStatus`
    pub recruitment_status: Option<String>,
    /// 요일, 쿼리 키 `dayOfWeek`
    pub day_of_week: Option<String>,
}

impl WorkFilter {
    /// 제약이 하나도 없는지
    pub fn is_empty(&self) -> bool {
        self.regions.is_none() && self.recruitment_status.is_none() && self.day_of_week.is_none()
    }
}
