//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티별 리포지토리 트레이트와 MongoDB 구현을 제공합니다.
//! 모든 연산은 저장소 이름과 컬렉션 이름을 호출 시점에 받으므로,
//! 동일한 구현이 여러 논리 네임스페이스(스테이징/프로덕션 등)를 서빙합니다.
//!
//! # Features
//!
//! - 트레이트 기반 계약으로 저장소 구현 교체 가능 (테스트용 인메모리 포함)
//! - 모든 저장소 연산에 요청 단위 데드라인 적용
//! - 삽입 식별자 에코 검증으로 기록 무결성 확인
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use crate::repositories::places::place_repo::{MongoPlaceRepository, PlaceRepository};
//!
//! let repo = MongoPlaceRepository::new(db, Duration::from_secs(5));
//! let place = repo.find_one("trouver", "places", "p1").await?;
//! ```

pub mod filter;
pub mod places;
pub mod reviews;

#[cfg(test)]
pub mod memory;

pub use filter::Filter;
