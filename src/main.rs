//! 장소 리뷰 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 컬렉션 인덱스를 준비한 뒤, 리포지토리와 서비스를
//! 명시적으로 조립하여 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use place_service_backend::config::{Config, StoreSettings};
use place_service_backend::db::Database;
use place_service_backend::domain::models::auth::{USER_ID_HEADER, USER_ROLE_HEADER};
use place_service_backend::repositories::places::place_repo::MongoPlaceRepository;
use place_service_backend::repositories::reviews::review_repo::MongoReviewRepository;
use place_service_backend::routes::configure_all_routes;
use place_service_backend::services::places::PlaceService;
use place_service_backend::services::reviews::ReviewService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 장소 리뷰 서비스 시작중...");

    let config = Config::from_env();
    info!("실행 환경: {}", config.environment.as_str());

    // 데이터 스토어 초기화
    let database = initialize_data_store(&config).await;

    // 리포지토리와 서비스 조립
    let (place_service, review_service) = initialize_services(&database, &config.store).await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(config, place_service, review_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Actix-web 기반 HTTP 서버를 설정하고 실행합니다.
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Arguments
///
/// * `config` - 애플리케이션 전체 설정
/// * `place_service` / `review_service` - 핸들러에 주입할 서비스
///
/// # Returns
///
/// * `Ok(())` - 서버가 정상적으로 종료됨
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: Config,
    place_service: web::Data<PlaceService>,
    review_service: web::Data<ReviewService>,
) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/v1/api", bind_address);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.limiter.per_second)
        .burst_size(config.limiter.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    if config.limiter.enabled {
        info!(
            "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
            config.limiter.per_second, config.limiter.burst_size
        );
    } else {
        info!("Rate Limiting 비활성화됨");
    }

    let limiter_enabled = config.limiter.enabled;

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(middleware::Condition::new(
                limiter_enabled,
                Governor::new(&governor_conf),
            ))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 서비스 주입
            .app_data(place_service.clone())
            .app_data(review_service.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=place_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// 데이터베이스 연결을 설정하고 연결 검증(ping)까지 마친 핸들을
/// 반환합니다. 연결 실패 시 애플리케이션이 종료됩니다.
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_data_store(config: &Config) -> Database {
    info!("📡 데이터베이스 연결 중...");

    Database::connect(&config.store)
        .await
        .expect("데이터베이스 연결 실패")
}

/// 리포지토리와 서비스를 조립합니다
///
/// MongoDB 리포지토리를 생성하고 컬렉션 인덱스를 준비한 뒤,
/// 트레이트 객체로 서비스에 주입합니다. 핸들러에 공유되도록
/// `web::Data`로 감싸 반환합니다.
///
/// # Panics
///
/// * 인덱스 생성 실패 시
async fn initialize_services(
    database: &Database,
    store: &StoreSettings,
) -> (web::Data<PlaceService>, web::Data<ReviewService>) {
    let place_repo = MongoPlaceRepository::new(database.clone(), store.op_timeout);
    let review_repo = MongoReviewRepository::new(database.clone(), store.op_timeout);

    // 전문 검색과 정렬 조회에 필요한 인덱스를 시작 시점에 보장
    place_repo
        .create_indexes(&store.database, &store.places_collection)
        .await
        .expect("장소 컬렉션 인덱스 생성 실패");
    review_repo
        .create_indexes(&store.database, &store.reviews_collection)
        .await
        .expect("리뷰 컬렉션 인덱스 생성 실패");

    info!("✅ 컬렉션 인덱스 준비 완료");

    let place_service = web::Data::new(PlaceService::new(Arc::new(place_repo), store));
    let review_service = web::Data::new(ReviewService::new(Arc::new(review_repo), store));

    (place_service, review_service)
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
///
/// # Returns
///
/// * `Cors` - 구성된 CORS 미들웨어
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더 (게이트웨이 없이 직접 호출하는 개발 환경용 식별 헤더 포함)
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .allowed_header(USER_ID_HEADER)
        .allowed_header(USER_ROLE_HEADER)

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
