//! 페이지네이션/검색 쿼리 DTO
//!
//! 목록/검색 엔드포인트의 쿼리 문자열(`?page=2&size=10`)을 담는 구조체입니다.
//! 1-기반 페이지 번호를 저장소 계층의 skip/limit으로 변환하는 책임은
//! `repositories::Filter`에 있으며, 이 모듈은 파라미터 수신과 기본값만 다룹니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 목록 조회 쿼리 파라미터
///
/// 두 필드 모두 생략 가능하며, 생략 시 1페이지 / 10건이 적용됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// 1-기반 페이지 번호 (기본값 1)
    pub page: Option<i64>,

    /// 페이지당 문서 수 (기본값 10)
    pub size: Option<i64>,
}

impl PageQuery {
    /// 페이지 번호 (기본값 적용)
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    /// 페이지 크기 (기본값 적용)
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(10)
    }
}

/// 장소 전문 검색 쿼리 파라미터 (`?q=커피&page=1&size=10`)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    /// 검색어 (필수, 공백만으로는 검색 불가)
    #[validate(custom(function = "validate_search_term"))]
    pub q: String,

    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl SearchQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(10)
    }
}

/// 검색어가 공백을 제외하고 비어있지 않은지 검증
fn validate_search_term(term: &str) -> Result<(), ValidationError> {
    if term.trim().is_empty() {
        return Err(ValidationError::new("empty_search_term")
            .with_message("검색어를 입력해주세요".into()));
    }
    Ok(())
}
