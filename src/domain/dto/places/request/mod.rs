//! # 장소 관련 요청 DTO 모듈
//!
//! 장소 도메인의 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 소유권 규칙
//!
//! 요청 DTO에는 `user_id` 필드가 존재하지 않습니다. 생성 시에는 인증 주체의
//! id가, 수정 시에는 저장된 문서의 소유자가 사용되므로 요청 본문으로
//! 소유권을 바꾸는 것은 타입 수준에서 차단됩니다.
//!
//! ## 에러 핸들링
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 이는 상위 에러 핸들러에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod create_place_request;
pub mod update_place_request;

pub use create_place_request::CreatePlaceRequest;
pub use update_place_request::UpdatePlaceRequest;
