//! Reviews Entity Module
//!
//! 리뷰 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 리뷰는 장소(`place_id`)를 관례상 참조할 뿐, 저장소 차원의
//! 참조 무결성 제약은 없습니다.

pub mod review;

pub use review::Review;
