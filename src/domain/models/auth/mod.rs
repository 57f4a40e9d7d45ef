//! 인증 주체 모델
//!
//! 외부 인증 계층이 검증을 마친 요청 주체를 표현합니다.
//! 토큰 발급/서명 검증은 이 서버의 책임이 아닙니다.

pub mod principal;

pub use principal::{Principal, Role, USER_ID_HEADER, USER_ROLE_HEADER};
