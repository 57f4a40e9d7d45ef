//! 장소 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`PlaceRepository`](place_repo::PlaceRepository) 트레이트가 장소 저장소의
//! 계약을 정의하고, [`MongoPlaceRepository`](place_repo::MongoPlaceRepository)가
//! MongoDB 기반 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::places::place_repo::PlaceRepository;
//!
//! let places = repo.list("trouver", "places", Filter::from_page(1, 10)).await?;
//! ```

pub mod place_repo;

pub use place_repo::{MongoPlaceRepository, PlaceRepository};
