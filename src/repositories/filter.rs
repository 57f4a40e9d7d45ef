//! 페이지 번호 기반 요청을 저장소 커서 옵션으로 변환하는 필터
use serde::{Deserialize, Serialize};

/// 목록/검색 연산에 적용되는 skip/limit 서술자
///
/// 요청마다 새로 구성해 저장소 연산에 전달하고 버립니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// 건너뛸 문서 수 (0-기반)
    pub skip: u64,

    /// 반환할 최대 문서 수
    pub limit: i64,
}

impl Filter {
    /// 1-기반 페이지 번호와 페이지 크기로부터 필터를 구성
    ///
    /// 페이지와 크기가 1 미만이면 1로 보정됩니다.
    /// `skip = (page - 1) * size`이므로 1페이지는 첫 문서부터 시작합니다.
    pub fn from_page(page: i64, size: i64) -> Filter {
        let page = page.max(1);
        let size = size.max(1);
        Filter {
            skip: ((page - 1) * size) as u64,
            limit: size,
        }
    }
}
