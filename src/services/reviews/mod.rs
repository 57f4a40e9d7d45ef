//! # 리뷰 서비스 모듈
//!
//! 장소에 속한 리뷰의 생명주기를 담당합니다. 소유권 판정과
//! 읽기-병합-쓰기 흐름은 장소 서비스와 동일한 규칙을 따릅니다.

pub mod review_service;

pub use review_service::ReviewService;
