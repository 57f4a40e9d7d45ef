//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 장소/리뷰 도메인의 객체와
//! API 계약, 인증 주체 모델을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속 비즈니스 객체 (Place, Review)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 값 객체 (Principal, Role)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 도메인 객체들입니다. 저장 스키마(`_id` 문자열 식별자,
//! 밀리초 타임스탬프)를 그대로 반영하며, 생성 이후 식별자와 소유자는
//! 변경되지 않습니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계의 요청/응답 계약입니다. 요청 DTO는 `validator` 규칙을 내장하고,
//! 수정 DTO는 전 필드 `Option`으로 "값 없음"과 "빈 값"을 구분합니다.
//! 응답 DTO는 저장 필드명(`_id`)을 API 필드명(`id`)으로 치환합니다.
//!
//! ### [`models`] - 값 객체
//!
//! 영속되지 않는 요청 수명의 값들입니다. 인증 주체([`models::auth::Principal`])가
//! 여기 속하며, 소유권 판정([`crate::policy`])의 입력이 됩니다.
//!
//! ## 설계 원칙
//!
//! 1. **명시적 변환**: From/Into trait을 통한 엔티티 ↔ DTO 변환
//! 2. **불변성 우선**: 식별자/소유자/생성 시각은 병합 과정에서도 보존
//! 3. **타입 수준 차단**: 요청 DTO에 소유자 필드를 두지 않아 탈취 불가

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
