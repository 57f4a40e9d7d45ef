//! # 장소 관련 응답 DTO 모듈
//!
//! 장소 도메인의 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! 저장소 스키마(`_id`)를 API 표면(`id`)과 분리하여,
//! 영속 계층의 변화가 클라이언트 계약으로 새어나가지 않게 합니다.
//!
//! ## 설계 철학
//!
//! - **스키마 분리**: 저장 필드명 대신 API 계약 필드명 사용
//! - **일관성**: 단건 조회, 목록, 검색이 모두 동일한 응답 구조 사용
//! - **선택 필드 생략**: 값이 없는 필드는 JSON에서 제외

pub mod place_response;

pub use place_response::PlaceResponse;
