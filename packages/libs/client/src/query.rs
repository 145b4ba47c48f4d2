//! 조회 URL 구성

use reqwest::Url;

use ys_core::filter::WorkFilter;

use crate::error::{ApiError, Result};

/// 봉사 목록 조회 URL 구성
///
/// 값이 있는 필터만 `regions` → `recruitmentStatus` → `dayOfWeek` 순서로
/// 쿼리 파라미터가 됩니다. 값은 URL 인코딩되고, 필터가 하나도 없으면
/// `?` 없이 경로만 돌려줍니다.
pub fn work_list_url(base_url: &str, filter: &WorkFilter) -> Result<Url> {
    let mut url = parse_url(&format!("{}/work/list", base_url))?;

    {
        let mut pairs = url.query_pairs_mut();
        if let Some(regions) = &filter.regions {
            pairs.append_pair("regions", regions);
        }
        if let Some(status) = &filter.recruitment_status {
            pairs.append_pair("recruitmentStatus", status);
        }
        if let Some(day) = &filter.day_of_week {
            pairs.append_pair("dayOfWeek", day);
        }
    }

    // query_pairs_mut 은 아무것도 더하지 않아도 `?` 를 남긴다
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url)
}

/// URL 파싱 (실패는 설정 오류로 취급)
pub(crate) fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| ApiError::Config {
        message: format!("invalid url {}: {}", raw, e),
    })
}
