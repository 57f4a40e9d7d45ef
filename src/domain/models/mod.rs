//! # Domain Models Module
//!
//! 도메인의 값 객체(Value Objects)를 정의하는 모듈입니다.
//! entities와는 구별되는 역할을 담당합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **생명주기**: 생성, 수정, 삭제의 완전한 생명주기
//! - **예시**: `Place`, `Review`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 요청 수명 동안 불변으로 사용
//! - **비영속**: 저장소에 기록되지 않음
//! - **예시**: `Principal`, `Role`
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! └── auth/               ← 인증 주체 모델
//!     └── principal.rs    ← Principal, Role
//! ```

pub mod auth;
