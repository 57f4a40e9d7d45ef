//! # Review Management HTTP Handlers
//!
//! 리뷰 자원의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 작성과 목록 조회는 장소 경로에 종속되고, 단건 조회/수정/삭제는
//! 리뷰 식별자만으로 접근하는 평면 경로를 사용합니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::dto::pagination::PageQuery;
use crate::domain::dto::reviews::request::{CreateReviewRequest, UpdateReviewRequest};
use crate::domain::models::auth::Principal;
use crate::errors::AppError;
use crate::services::reviews::ReviewService;

/// 리뷰 작성 핸들러
///
/// 경로의 장소에 새 리뷰를 작성합니다. 작성자는 인증 주체에서,
/// 대상 장소는 경로 파라미터에서 결정됩니다.
///
/// # 엔드포인트
///
/// `POST /v1/api/places/{place_id}/reviews`
///
/// # 요청 본문
///
/// ```json
/// {
///   "content": "커피가 맛있어요",
///   "rating": 4.5
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
///   "place_id": "550e8400-e29b-41d4-a716-446655440000",
///   "user_id": "u1",
///   "content": "커피가 맛있어요",
///   "rating": 4.5,
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "validation_error",
///   "message": "입력값이 유효하지 않습니다",
///   "details": {
///     "rating": [{"code": "range", "message": "평점은 1.0-5.0 사이여야 합니다"}]
///   }
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/v1/api/places/550e8400/reviews \
///   -H "Content-Type: application/json" \
///   -H "X-User-Id: u1" \
///   -H "X-User-Role: user" \
///   -d '{"content": "커피가 맛있어요", "rating": 4.5}'
/// ```
#[post("")]
pub async fn create_review(
    principal: Principal,
    service: web::Data<ReviewService>,
    place_id: web::Path<String>,
    payload: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .create_review(&principal, &place_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 장소의 리뷰 목록 조회 핸들러
///
/// 경로의 장소에 작성된 리뷰를 생성 시각 오름차순으로 페이징하여
/// 반환합니다. 리뷰가 없는 장소는 빈 목록으로 응답합니다.
///
/// # 엔드포인트
///
/// `GET /v1/api/places/{place_id}/reviews?page=1&size=10`
#[get("")]
pub async fn list_reviews(
    service: web::Data<ReviewService>,
    place_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let reviews = service.list_reviews(&place_id, &query).await?;

    Ok(HttpResponse::Ok().json(reviews))
}

/// 리뷰 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /v1/api/reviews/{review_id}`
#[get("/{review_id}")]
pub async fn get_review(
    service: web::Data<ReviewService>,
    review_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let review = service.get_review(&review_id).await?;

    Ok(HttpResponse::Ok().json(review))
}

/// 리뷰 부분 수정 핸들러
///
/// 제공된 필드만 갱신합니다. 작성자이거나 관리자일 때만 허용됩니다.
///
/// # 엔드포인트
///
/// `PATCH /v1/api/reviews/{review_id}`
///
/// # 응답
///
/// ## 권한 없음 (403 Forbidden)
/// ```json
/// {
///   "error": "forbidden",
///   "message": "이 리뷰를 수정할 권한이 없습니다"
/// }
/// ```
#[patch("/{review_id}")]
pub async fn update_review(
    principal: Principal,
    service: web::Data<ReviewService>,
    review_id: web::Path<String>,
    payload: web::Json<UpdateReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .update_review(&principal, &review_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 리뷰 삭제 핸들러
///
/// 작성자이거나 관리자일 때만 허용됩니다.
///
/// # 엔드포인트
///
/// `DELETE /v1/api/reviews/{review_id}`
#[delete("/{review_id}")]
pub async fn delete_review(
    principal: Principal,
    service: web::Data<ReviewService>,
    review_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_review(&principal, &review_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
