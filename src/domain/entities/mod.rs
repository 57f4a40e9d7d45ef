//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함하며,
//! 저장소에 영속화되는 형태 그대로를 표현합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 장소와 리뷰 도메인의 핵심 개념을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: BSON/JSON ↔ Rust 구조체 변환 지원
//!
//! ## 아키텍처 특징
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속화되는 문서 구조)
//! ├── models/       ← 도메인 모델 및 값 객체 (Principal 등)
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//!
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **문자열 `_id`**: 코어가 UUID v4 문자열을 직접 할당하여 `_id`로 저장
//! - **불변 식별자**: `id`, 소유자 `user_id`는 생성 이후 변경되지 않음
//! - **밀리초 타임스탬프**: `bson::DateTime`으로 저장하여 저장소 왕복 후에도
//!   값이 손실 없이 유지됨

pub mod places;
pub mod reviews;

pub use places::*;
pub use reviews::*;
