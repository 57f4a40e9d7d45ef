//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크 기반이며, 요청 파싱과 응답 변환만 담당하고
//! 비즈니스 로직은 전부 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 소유권 판정, 병합                ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB 데이터 접근              ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTO - 도메인 모델                      ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 엔드포인트 요약
//!
//! ### 장소 (`places`)
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/v1/api/places` | 새 장소 등록 | 201 Created |
//! | `GET` | `/v1/api/places` | 장소 목록 (페이징) | 200 OK |
//! | `GET` | `/v1/api/places/search` | 장소 전문 검색 | 200 OK |
//! | `GET` | `/v1/api/places/{place_id}` | 장소 단건 조회 | 200 OK |
//! | `PATCH` | `/v1/api/places/{place_id}` | 장소 부분 수정 | 200 OK |
//! | `DELETE` | `/v1/api/places/{place_id}` | 장소 삭제 | 204 No Content |
//!
//! ### 리뷰 (`reviews`)
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/v1/api/places/{place_id}/reviews` | 리뷰 작성 | 201 Created |
//! | `GET` | `/v1/api/places/{place_id}/reviews` | 장소의 리뷰 목록 | 200 OK |
//! | `GET` | `/v1/api/reviews/{review_id}` | 리뷰 단건 조회 | 200 OK |
//! | `PATCH` | `/v1/api/reviews/{review_id}` | 리뷰 부분 수정 | 200 OK |
//! | `DELETE` | `/v1/api/reviews/{review_id}` | 리뷰 삭제 | 204 No Content |
//!
//! ## 인증 주체 추출
//!
//! 변경 연산(`POST`/`PATCH`/`DELETE`)은 [`Principal`] 추출기를 파라미터로
//! 받습니다. 게이트웨이가 채운 식별 헤더(`X-User-Id`, `X-User-Role`)가
//! 없거나 역할이 알려진 값이 아니면 핸들러 진입 전에 401로 거부됩니다.
//! 읽기 연산은 주체 없이 접근 가능합니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_place(
//!     principal: Principal,                    // 식별 헤더 추출 (실패 시 401)
//!     service: web::Data<PlaceService>,        // 주입된 서비스
//!     payload: web::Json<CreatePlaceRequest>,  // JSON 본문 파싱
//! ) -> Result<HttpResponse, AppError> {
//!     let response = service.create_place(&principal, payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 에러 매핑
//!
//! 서비스가 반환한 [`AppError`]는 `ResponseError` 구현을 통해 HTTP
//! 경계에서 한 번만 변환됩니다:
//!
//! | 에러 | 상태 코드 | `error` 코드 |
//! |------|-----------|--------------|
//! | `Validation` | 400 | `validation_error` |
//! | `Forbidden` | 403 | `forbidden` |
//! | `NotFound` | 404 | `not_found` |
//! | `Persistence` | 500 | `persistence_error` |
//! | `Timeout` | 500 | `timeout` |
//!
//! [`Principal`]: crate::domain::models::auth::Principal
//! [`AppError`]: crate::errors::AppError

pub mod places;
pub mod reviews;
