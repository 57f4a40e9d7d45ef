//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 서비스/리포지토리 계층은 `Result<T, AppError>`를 반환하고,
//! HTTP 경계에서 단 한 번 상태 코드와 JSON 응답으로 변환됩니다.
//!
//! ## 에러 응답 형식
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "입력값이 유효하지 않습니다",
//!   "details": {
//!     "title": [{"code": "length", "message": "제목은 1-150자 사이여야 합니다"}]
//!   }
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_place(id: &str) -> Result<Place, AppError> {
//!     place_repo.find_one("trouver", "places", id).await
//! }
//! ```

use log::error;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
///
/// `Persistence`와 `Timeout`은 둘 다 500으로 응답하지만 `error` 코드가
/// 서로 다르므로 클라이언트와 모니터링 시스템에서 구분할 수 있습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 위반된 모든 필드를 한 번에 수집하여 `details`로 직렬화합니다.
    #[error("입력값이 유효하지 않습니다")]
    Validation(#[from] ValidationErrors),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("{0}")]
    Forbidden(String),

    /// 저장소 관련 에러 (500 Internal Server Error)
    ///
    /// 상세 내용은 서버 로그에만 기록하고 클라이언트에는 노출하지 않습니다.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// 저장소 작업 시간 초과 (500 Internal Server Error)
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl AppError {
    /// 에러 응답 본문의 기계 판독용 `error` 코드를 반환합니다.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::Forbidden(_) => "forbidden",
            AppError::Persistence(_) => "persistence_error",
            AppError::Timeout(_) => "timeout",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 서버 내부 에러는 상세 내용을 로그로 남기고 일반화된 메시지만 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Persistence(_) | AppError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            AppError::Validation(errors) => serde_json::json!({
                "error": self.error_code(),
                "message": self.to_string(),
                "details": errors,
            }),
            AppError::Persistence(detail) => {
                error!("저장소 오류: {}", detail);
                serde_json::json!({
                    "error": self.error_code(),
                    "message": "서버 오류가 발생했습니다",
                })
            }
            AppError::Timeout(detail) => {
                error!("저장소 작업 시간 초과: {}", detail);
                serde_json::json!({
                    "error": self.error_code(),
                    "message": "요청 처리 시간이 초과되었습니다",
                })
            }
            _ => serde_json::json!({
                "error": self.error_code(),
                "message": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}
