//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀은 `mongodb::Client`가 내부적으로 관리하며, 이 모듈은
//! 설정 기반 연결 생성과 시작 시점의 연결 검증(ping)을 제공합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::Config;
//! use crate::db::Database;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let database = Database::connect(&config.store).await?;
//!     Ok(())
//! }
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::StoreSettings;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 기본 데이터베이스 이름을 관리하며,
/// 리포지토리 계층에서 데이터베이스 작업을 위한 기본 인터페이스를 제공합니다.
/// `Client`는 내부적으로 연결 풀을 공유하므로 `Arc` 없이도 저렴하게
/// 복제할 수 있습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 기본 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정값으로 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱하고 `ping` 명령으로 연결 상태를 검증한 후
    /// Database 인스턴스를 반환합니다. 환경 변수를 직접 읽지 않으며,
    /// 모든 연결 정보는 호출자가 전달한 설정에서 가져옵니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&config.store).await?;
    /// ```
    pub async fn connect(settings: &StoreSettings) -> Result<Self, mongodb::error::Error> {
        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(&settings.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("trouver".to_string());

        // MongoDB 클라이언트 생성
        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&settings.database)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", settings.database);

        Ok(Self {
            client,
            database_name: settings.database.clone(),
        })
    }

    /// 이름으로 MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// 리포지토리 계약은 호출마다 데이터베이스 이름을 받으므로,
    /// 리포지토리 구현이 네임스페이스를 해석할 때 사용됩니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let places = database.database("trouver").collection::<Place>("places");
    /// ```
    pub fn database(&self, name: &str) -> mongodb::Database {
        self.client.database(name)
    }

    /// 설정에 지정된 기본 데이터베이스 인스턴스를 반환합니다.
    pub fn default_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// MongoDB 클라이언트 인스턴스를 반환합니다.
    ///
    /// 고급 사용 사례나 클라이언트 레벨의 작업이 필요한 경우
    /// (예: 세션 관리, 트랜잭션 등)에 사용됩니다.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 기본 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
