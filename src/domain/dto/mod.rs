//! # Data Transfer Objects Module
//!
//! HTTP 요청/응답 데이터 전송 객체(DTO)들을 정의하는 모듈입니다.
//! 클라이언트와 주고받는 JSON 구조를 엔티티와 분리하여,
//! 저장소 스키마 변경이 API 계약에 바로 새어나가지 않도록 합니다.
//!
//! ## 주요 기능
//!
//! - **타입 안전성**: 컴파일 타임에 데이터 구조 검증
//! - **자동 역직렬화**: `serde`를 통한 JSON ↔ Rust 타입 변환
//! - **입력 검증**: `validator` 크레이트를 통한 선언적 검증 규칙
//! - **에러 메시지**: 한국어 메시지로 사용자 친화적 에러 응답
//!
//! ## 요청 DTO와 소유권
//!
//! 생성/수정 요청 DTO에는 소유자 필드(`user_id`)가 아예 존재하지 않습니다.
//! 소유자는 생성 시 인증 주체에서, 수정 시 저장된 문서에서 가져오므로
//! 요청 본문으로 소유권을 탈취하는 것은 타입 수준에서 불가능합니다.
//!
//! ## 수정 DTO의 병합 의미론
//!
//! 수정 요청의 모든 필드는 `Option`입니다. 값이 없는 필드는 저장된 값을
//! 유지하며(`apply_to`), 필드를 비우는 동작은 현재 표현할 수 없습니다.
//! `location`이 제공되면 위치 서브문서 전체가 교체됩니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 길이, URL, 이메일, 범위 등 선언적 규칙 (validator)
//! 3. **좌표 검증**: 경도/위도 축별 범위 검증 (수동 `Validate` 구현)
//!
//! 검증 실패 시 위반된 모든 필드가 하나의 `ValidationErrors`로 수집되어
//! 400 응답의 `details`로 직렬화됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::domain::dto::places::request::CreatePlaceRequest;
//!
//! #[actix_web::post("")]
//! async fn create_place(
//!     payload: web::Json<CreatePlaceRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     // 검증은 서비스 계층에서 수행됩니다
//!     let response = service.create_place(principal, payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```

pub mod pagination;
pub mod places;
pub mod reviews;

pub use pagination::*;
pub use places::*;
pub use reviews::*;
