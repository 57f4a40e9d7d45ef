//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 장소, 리뷰 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 장소 CRUD 및 전문 검색 API 엔드포인트
//! - 장소에 종속된 리뷰 CRUD API 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! # 등록 순서 규칙
//!
//! 두 가지 경로 겹침이 있으므로 등록 순서가 동작을 결정합니다:
//!
//! 1. 중첩 리뷰 스코프(`/v1/api/places/{place_id}/reviews`)는 장소
//!    스코프(`/v1/api/places`)보다 먼저 등록합니다. 장소 스코프가
//!    접두사를 먼저 차지하면 하위 리뷰 경로는 404가 됩니다.
//! 2. 장소 스코프 안에서 `GET /search`는 `GET /{place_id}`보다 먼저
//!    등록합니다. 뒤집히면 `search`가 장소 식별자로 해석됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::config::Environment;
use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // 중첩 리뷰 스코프가 장소 스코프보다 먼저 와야 한다
    configure_review_routes(cfg);
    configure_place_routes(cfg);
}

/// 장소 관련 라우트를 설정합니다
///
/// 장소 생성, 조회, 목록, 검색, 수정, 삭제 API 엔드포인트를 등록합니다.
///
/// # Available Routes
///
/// - `POST /v1/api/places` - 장소 생성 (인증 필요)
/// - `GET /v1/api/places` - 장소 목록 (페이징)
/// - `GET /v1/api/places/search` - 장소 전문 검색
/// - `GET /v1/api/places/{place_id}` - 장소 단건 조회
/// - `PATCH /v1/api/places/{place_id}` - 장소 부분 수정 (소유자/관리자)
/// - `DELETE /v1/api/places/{place_id}` - 장소 삭제 (소유자/관리자)
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// # 목록 조회 - 인증 없이 접근 가능
/// curl "http://localhost:8080/v1/api/places?page=1&size=10"
///
/// # 생성 - 식별 헤더 필요
/// curl -X POST http://localhost:8080/v1/api/places \
///   -H "Content-Type: application/json" \
///   -H "X-User-Id: u1" -H "X-User-Role: user" \
///   -d '{"title":"성수동 카페","description":"스페셜티 커피"}'
/// ```
fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/api/places")
            // "/search"가 "/{place_id}"보다 먼저
            .service(handlers::places::search_places)
            .service(handlers::places::create_place)
            .service(handlers::places::list_places)
            .service(handlers::places::get_place)
            .service(handlers::places::update_place)
            .service(handlers::places::delete_place),
    );
}

/// 리뷰 관련 라우트를 설정합니다
///
/// 작성/목록은 장소에 종속된 중첩 경로, 단건 조회/수정/삭제는
/// 리뷰 식별자만 사용하는 평면 경로로 등록합니다.
///
/// # Available Routes
///
/// ## 장소 종속 (중첩 경로)
/// - `POST /v1/api/places/{place_id}/reviews` - 리뷰 작성 (인증 필요)
/// - `GET /v1/api/places/{place_id}/reviews` - 장소의 리뷰 목록
///
/// ## 평면 경로
/// - `GET /v1/api/reviews/{review_id}` - 리뷰 단건 조회
/// - `PATCH /v1/api/reviews/{review_id}` - 리뷰 수정 (작성자/관리자)
/// - `DELETE /v1/api/reviews/{review_id}` - 리뷰 삭제 (작성자/관리자)
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// # 장소의 리뷰 목록
/// curl "http://localhost:8080/v1/api/places/550e8400/reviews?page=1"
///
/// # 리뷰 수정
/// curl -X PATCH http://localhost:8080/v1/api/reviews/7c9e6679 \
///   -H "Content-Type: application/json" \
///   -H "X-User-Id: u1" -H "X-User-Role: user" \
///   -d '{"rating": 3.0}'
/// ```
fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/api/places/{place_id}/reviews")
            .service(handlers::reviews::create_review)
            .service(handlers::reviews::list_reviews),
    );

    cfg.service(
        web::scope("/v1/api/reviews")
            .service(handlers::reviews::get_review)
            .service(handlers::reviews::update_review)
            .service(handlers::reviews::delete_review),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("available")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `environment`: 실행 환경
///   - `timestamp`: 응답 시각
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "available",
///   "service": "place_service_backend",
///   "version": "0.1.0",
///   "environment": "development",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "available",
        "service": "place_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": Environment::current().as_str(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
