//! # Place Data Transfer Objects Module
//!
//! 장소 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 장소 데이터 교환을 위한 계약을 정의하며,
//! 엔티티의 저장 스키마(`_id` 등)를 API 표면에서 숨깁니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! places/
//! ├── request/                      # 클라이언트 → 서버 요청 DTO
//! │   ├── create_place_request.rs  # 장소 생성 요청
//! │   └── update_place_request.rs  # 장소 부분 수정 요청
//! └── response/                     # 서버 → 클라이언트 응답 DTO
//!     └── place_response.rs        # 장소 조회/목록 응답
//! ```
//!
//! ## 요청 DTO (Request DTOs)
//!
//! ### CreatePlaceRequest - 장소 생성 요청
//!
//! 소유자(`user_id`)와 식별자(`id`), 생성 시각은 요청에 포함되지 않습니다.
//! 서버가 인증 주체와 UUID, 현재 시각으로 채웁니다.
//!
//! ```json
//! {
//!   "title": "강남 커피집",
//!   "description": "조용한 분위기의 스페셜티 카페",
//!   "categories": ["cafe", "dessert"],
//!   "image_url": "https://img.example.com/cafe.jpg",
//!   "phone_number": "02-1234-5678",
//!   "email": "hello@cafe.example.com",
//!   "location": {
//!     "address": {
//!       "street_1": "테헤란로 123",
//!       "city": "서울",
//!       "state": "서울특별시",
//!       "zip_code": "06133"
//!     },
//!     "geo": {
//!       "type": "Point",
//!       "coordinates": [127.0276, 37.4979]
//!     }
//!   }
//! }
//! ```
//!
//! ### UpdatePlaceRequest - 장소 부분 수정 요청
//!
//! 모든 필드가 선택적입니다. 생략된 필드는 저장된 값을 유지하며,
//! `location`이 제공되면 위치 서브문서 전체가 교체됩니다.
//! 필드를 "비우는" 동작은 이 DTO로는 표현할 수 없습니다.
//!
//! ```json
//! {
//!   "title": "강남 커피집 (리뉴얼)",
//!   "categories": ["cafe", "bakery"]
//! }
//! ```
//!
//! ## 검증 규칙
//!
//! - **title / description**: 필수, 최대 150자
//! - **categories**: 최대 5개
//! - **image_url**: URL 형식
//! - **phone_number**: 최대 20자
//! - **email**: 이메일 형식
//! - **주소 구성요소**: 각 최대 30자
//! - **좌표**: 경도 [-180, 180], 위도 [-90, 90] 축별 독립 검증
//!
//! 검증 실패 시 위반된 모든 필드가 하나의 에러로 수집되어
//! 400 응답의 `details`에 담깁니다.
//!
//! ## 응답 DTO (Response DTOs)
//!
//! ### PlaceResponse - 장소 정보 응답
//!
//! 저장 필드명 `_id` 대신 `id`로 노출합니다.
//!
//! ```json
//! {
//!   "id": "8f14e45f-ceea-4a78-a2f4-8f63bb21a1c3",
//!   "user_id": "u1",
//!   "title": "강남 커피집",
//!   "description": "조용한 분위기의 스페셜티 카페",
//!   "categories": ["cafe", "dessert"],
//!   "created_at": "2024-01-15T10:30:00Z"
//! }
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
