//! # Place Management HTTP Handlers
//!
//! 장소 자원의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD와 전문 검색을 지원하며, RESTful API 설계 원칙을 따릅니다.
//!
//! ## 라우트 등록 주의사항
//!
//! `GET /search`와 `GET /{place_id}`는 같은 깊이의 경로이므로
//! 리터럴 경로인 `/search`를 먼저 등록해야 합니다. 순서가 뒤집히면
//! `search`가 장소 식별자로 해석되어 검색 엔드포인트가 가려집니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::dto::pagination::{PageQuery, SearchQuery};
use crate::domain::dto::places::request::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::domain::models::auth::Principal;
use crate::errors::AppError;
use crate::services::places::PlaceService;

/// 장소 생성 핸들러
///
/// 새로운 장소를 등록합니다. 소유자는 요청 본문이 아니라 인증 주체에서
/// 결정되며, 식별자와 생성 시각은 서버가 부여합니다.
///
/// # 엔드포인트
///
/// `POST /v1/api/places`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "성수동 카페",
///   "description": "조용한 골목의 스페셜티 커피",
///   "categories": ["cafe", "dessert"],
///   "location": {
///     "address": {
///       "street_1": "연무장길 47",
///       "city": "서울",
///       "zip_code": "04790"
///     },
///     "geo": {
///       "type": "Point",
///       "coordinates": [127.0557, 37.5424]
///     }
///   }
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "user_id": "u1",
///   "title": "성수동 카페",
///   "description": "조용한 골목의 스페셜티 커피",
///   "categories": ["cafe", "dessert"],
///   "location": { "...": "..." },
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
///
/// 위반된 필드를 한 번에 모두 수집하여 반환합니다.
/// ```json
/// {
///   "error": "validation_error",
///   "message": "입력값이 유효하지 않습니다",
///   "details": {
///     "title": [{"code": "length", "message": "장소 이름은 1-150자 사이여야 합니다"}],
///     "image_url": [{"code": "url", "message": "유효한 URL이 아닙니다"}]
///   }
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/v1/api/places \
///   -H "Content-Type: application/json" \
///   -H "X-User-Id: u1" \
///   -H "X-User-Role: user" \
///   -d '{"title": "성수동 카페", "description": "조용한 골목의 스페셜티 커피"}'
/// ```
#[post("")]
pub async fn create_place(
    principal: Principal,
    service: web::Data<PlaceService>,
    payload: web::Json<CreatePlaceRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_place(&principal, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 장소 목록 조회 핸들러
///
/// 생성 시각 오름차순으로 정렬된 장소 목록을 페이징하여 반환합니다.
///
/// # 엔드포인트
///
/// `GET /v1/api/places?page=1&size=10`
///
/// # 쿼리 파라미터
///
/// - `page`: 1부터 시작하는 페이지 번호 (기본값 1)
/// - `size`: 페이지당 문서 수 (기본값 10)
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:8080/v1/api/places?page=2&size=5"
/// ```
#[get("")]
pub async fn list_places(
    service: web::Data<PlaceService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let places = service.list_places(&query).await?;

    Ok(HttpResponse::Ok().json(places))
}

/// 장소 전문 검색 핸들러
///
/// 제목과 설명을 대상으로 텍스트 검색을 수행하고 관련도 내림차순으로
/// 반환합니다. 검색어가 비어 있으면 400으로 거부됩니다.
///
/// # 엔드포인트
///
/// `GET /v1/api/places/search?q={검색어}&page=1&size=10`
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:8080/v1/api/places/search?q=coffee"
/// ```
#[get("/search")]
pub async fn search_places(
    service: web::Data<PlaceService>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let places = service.search_places(&query).await?;

    Ok(HttpResponse::Ok().json(places))
}

/// 장소 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /v1/api/places/{place_id}`
///
/// # 응답
///
/// ## 장소 없음 (404 Not Found)
/// ```json
/// {
///   "error": "not_found",
///   "message": "장소를 찾을 수 없습니다"
/// }
/// ```
#[get("/{place_id}")]
pub async fn get_place(
    service: web::Data<PlaceService>,
    place_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let place = service.get_place(&place_id).await?;

    Ok(HttpResponse::Ok().json(place))
}

/// 장소 부분 수정 핸들러
///
/// 요청 본문에 제공된 필드만 갱신하고 생략된 필드는 유지합니다.
/// 저장된 문서의 소유자이거나 관리자일 때만 허용됩니다.
///
/// # 엔드포인트
///
/// `PATCH /v1/api/places/{place_id}`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "성수동 카페 리뉴얼"
/// }
/// ```
///
/// # 응답
///
/// ## 권한 없음 (403 Forbidden)
/// ```json
/// {
///   "error": "forbidden",
///   "message": "이 장소를 수정할 권한이 없습니다"
/// }
/// ```
///
/// 존재하지 않는 문서는 권한 판정 이전에 404로 응답하므로,
/// 403은 문서가 존재한다는 사실 자체는 노출합니다.
#[patch("/{place_id}")]
pub async fn update_place(
    principal: Principal,
    service: web::Data<PlaceService>,
    place_id: web::Path<String>,
    payload: web::Json<UpdatePlaceRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .update_place(&principal, &place_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 장소 삭제 핸들러
///
/// 저장된 문서의 소유자이거나 관리자일 때만 허용됩니다.
///
/// # 엔드포인트
///
/// `DELETE /v1/api/places/{place_id}`
///
/// # 사용 예제
///
/// ```bash
/// curl -X DELETE http://localhost:8080/v1/api/places/550e8400-e29b-41d4-a716-446655440000 \
///   -H "X-User-Id: u1" \
///   -H "X-User-Role: user"
/// ```
#[delete("/{place_id}")]
pub async fn delete_place(
    principal: Principal,
    service: web::Data<PlaceService>,
    place_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_place(&principal, &place_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
