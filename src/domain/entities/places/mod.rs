//! Places Entity Module
//!
//! 장소 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 장소 문서(`Place`)와 그 값 객체들(`Location`, `Address`, `GeoPoint`)을
//! 포함합니다. 값 객체들은 요청 DTO에서도 그대로 재사용됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::places::place::{GeoPoint, Place};
//!
//! let geo = GeoPoint {
//!     geo_type: "Point".to_string(),
//!     coordinates: vec![126.9101, 37.5563], // [경도, 위도]
//! };
//! geo.validate()?;
//! ```

pub mod place;

pub use place::{Address, GeoPoint, Location, Place};
