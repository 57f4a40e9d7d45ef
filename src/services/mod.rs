//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 검증 → 소유권 판정 → 저장소 연산으로 이어지는 요청 흐름을 조율합니다.
//! 리포지토리는 트레이트 객체로 생성 시점에 주입되며, 저장소/컬렉션
//! 네임스페이스는 설정에서 받아 보관합니다.
//!
//! # Features
//!
//! - 장소 생명주기 관리 (생성, 조회, 목록, 수정, 삭제, 검색)
//! - 리뷰 생명주기 관리 (생성, 조회, 장소별 목록, 수정, 삭제)
//! - 소유자/관리자 기반 변경 권한 판정
//! - 읽기-병합-쓰기 방식의 부분 수정
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::places::place_service::PlaceService;
//!
//! let service = PlaceService::new(Arc::new(repo), &config.store);
//! let response = service.create_place(&principal, request).await?;
//! ```

pub mod places;
pub mod reviews;
