//! 장소 관리 서비스 모듈
//!
//! 장소 생명주기와 관련된 비즈니스 로직을 담당합니다.
//! 입력 검증, 식별자/소유자/생성 시각 부여, 소유권 판정,
//! 읽기-병합-쓰기 수정 흐름을 구현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::places::place_service::PlaceService;
//!
//! let response = place_service.update_place(&principal, "p1", request).await?;
//! ```

pub mod place_service;

pub use place_service::PlaceService;
