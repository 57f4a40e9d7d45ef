//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 요청 제한 관련 설정을 관리합니다.
//! 모든 설정은 `Config::from_env()`로 시작 시점에 한 번 로드되어
//! 생성자 주입으로 전달됩니다. 전역 가변 상태는 없습니다.

use std::env;
use std::time::Duration;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()))
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경 이름을 소문자 문자열로 반환합니다. 헬스체크 응답 등에 사용됩니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// 바인딩할 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    pub host: String,
    /// 바인딩할 포트 번호. 기본값: 8080
    pub port: u16,
}

impl ServerSettings {
    /// 환경 변수에서 서버 설정을 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    /// - `PORT`: 커스텀 포트 설정
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        Self { host, port }
    }

    /// `host:port` 형식의 바인딩 주소를 반환합니다.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 문서 저장소(MongoDB) 설정
///
/// 리포지토리 계약은 호출마다 `(database, collection)`을 받으므로
/// 이 설정은 서비스 계층이 호출 시점에 공급하는 네임스페이스의 출처입니다.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub uri: String,
    /// 사용할 데이터베이스 이름. 기본값: "trouver"
    pub database: String,
    /// 장소 컬렉션 이름. 기본값: "places"
    pub places_collection: String,
    /// 리뷰 컬렉션 이름. 기본값: "reviews"
    pub reviews_collection: String,
    /// 저장소 작업별 데드라인. 기본값: 5초
    pub op_timeout: Duration,
}

impl StoreSettings {
    /// 환경 변수에서 저장소 설정을 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// - `MONGODB_URI`: MongoDB 연결 URI
    /// - `DATABASE_NAME`: 데이터베이스 이름
    /// - `PLACES_COLLECTION` / `REVIEWS_COLLECTION`: 컬렉션 이름
    /// - `STORE_OP_TIMEOUT_SECS`: 작업별 데드라인 (초)
    pub fn from_env() -> Self {
        let uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = env::var("DATABASE_NAME").unwrap_or_else(|_| "trouver".to_string());
        let places_collection =
            env::var("PLACES_COLLECTION").unwrap_or_else(|_| "places".to_string());
        let reviews_collection =
            env::var("REVIEWS_COLLECTION").unwrap_or_else(|_| "reviews".to_string());
        let op_timeout_secs = env::var("STORE_OP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .unwrap_or(5);

        Self {
            uri,
            database,
            places_collection,
            reviews_collection,
            op_timeout: Duration::from_secs(op_timeout_secs),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct LimiterSettings {
    /// 초당 허용 요청 수. 기본값: 100
    pub per_second: u64,
    /// 버스트 허용량. 기본값: 200
    pub burst_size: u32,
    /// Rate Limiting 활성화 여부. 기본값: true
    pub enabled: bool,
}

impl LimiterSettings {
    /// 환경 변수에서 Rate Limiting 설정을 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// - `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// - `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    /// - `RATE_LIMIT_ENABLED` - 활성화 여부 (기본값: true)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            per_second,
            burst_size,
            enabled,
        }
    }
}

/// 애플리케이션 전체 설정
///
/// 시작 시점에 `from_env()`로 한 번 로드한 뒤 필요한 곳에
/// 생성자 인자로 전달합니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 애플리케이션 이름. 기본값: "trouver"
    pub app_name: String,
    /// 애플리케이션 버전 (Cargo 패키지 버전)
    pub version: String,
    /// 현재 실행 환경
    pub environment: Environment,
    /// 서버 바인딩 설정
    pub server: ServerSettings,
    /// 문서 저장소 설정
    pub store: StoreSettings,
    /// Rate Limiting 설정
    pub limiter: LimiterSettings,
}

impl Config {
    /// 환경 변수에서 전체 설정을 로드합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = Config::from_env();
    /// let database = Database::connect(&config.store).await?;
    /// ```
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "trouver".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::current(),
            server: ServerSettings::from_env(),
            store: StoreSettings::from_env(),
            limiter: LimiterSettings::from_env(),
        }
    }
}
