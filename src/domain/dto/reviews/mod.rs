//! # Review Data Transfer Objects Module
//!
//! 리뷰 관련 API의 요청/응답 데이터 구조를 정의합니다.
//! 장소보다 필드가 적어 요청/응답을 각각 단일 파일로 구성합니다.
//!
//! ## 필드 계약
//!
//! - 리뷰 본문은 `content` 필드로 노출합니다 (장소의 `title`과 혼동 방지).
//! - 평점은 1.0 이상 5.0 이하의 실수입니다.
//! - `place_id`와 소유자는 경로/인증에서 오며 요청 본문에 포함되지 않습니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
