//! # 장소 리포지토리 구현
//!
//! 장소 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하며, 트레이트 계약을 통해 구현을 교체할 수
//! 있습니다 (테스트에서는 인메모리 구현 사용).
//!
//! ## 특징
//!
//! - **명시적 네임스페이스**: 저장소/컬렉션 이름을 호출마다 전달
//! - **요청 단위 데드라인**: 모든 연산이 고정 시간 예산 안에서 실행
//! - **무결성 검증**: 삽입 후 저장소가 보고한 식별자를 요청 값과 대조
//! - **전문 검색**: 텍스트 인덱스 기반 관련도 정렬 검색

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{self, Bson, doc},
    error::ErrorKind,
    options::IndexOptions,
};
use tokio::time::timeout;

use crate::db::Database;
use crate::domain::entities::places::place::Place;
use crate::errors::AppError;
use crate::repositories::filter::Filter;

/// 장소 저장소 계약
///
/// 모든 연산은 저장소 이름과 컬렉션 이름을 호출 시점에 받습니다.
/// 같은 구현 인스턴스가 여러 논리 네임스페이스를 서빙할 수 있도록
/// 이름을 타입에 굽지 않습니다.
///
/// ## 정렬 보장
///
/// [`list`](PlaceRepository::list)는 생성 시각 오름차순, 동률이면 `_id`
/// 오름차순으로 반환합니다. [`search_place`](PlaceRepository::search_place)는
/// 관련도 내림차순입니다.
///
/// ## 에러 계약
///
/// - 문서 없음 / 디코딩 불가 → [`AppError::NotFound`]
/// - 저장소 수준 실패 → [`AppError::Persistence`]
/// - 시간 예산 초과 → [`AppError::Timeout`]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// 새 장소 문서를 저장
    ///
    /// 식별자는 호출자가 미리 부여합니다. 저장소가 보고한 식별자가
    /// 요청 값과 다르면 기록 무결성 실패로 간주합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 저장된 문서의 식별자
    /// * `Err(AppError::Persistence)` - 쓰기 거부 또는 식별자 불일치
    async fn insert_one(
        &self,
        database: &str,
        collection: &str,
        place: &Place,
    ) -> Result<String, AppError>;

    /// 식별자로 장소 문서를 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Place)` - 조회된 문서
    /// * `Err(AppError::NotFound)` - 일치하는 문서가 없거나 디코딩 불가
    async fn find_one(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
    ) -> Result<Place, AppError>;

    /// 장소 문서 목록을 조회
    ///
    /// `filter.skip`만큼 건너뛰고 `filter.limit`개까지 반환합니다.
    /// 일치하는 문서가 없으면 빈 목록을 반환하며, 에러가 아닙니다.
    /// `limit`이 0 이하이면 저장소를 조회하지 않고 빈 목록을 반환합니다.
    async fn list(
        &self,
        database: &str,
        collection: &str,
        filter: Filter,
    ) -> Result<Vec<Place>, AppError>;

    /// 저장된 장소 문서를 병합 갱신
    ///
    /// 전달된 엔티티의 필드로 `_id`가 일치하는 문서를 덮어씁니다.
    /// 호출자는 저장된 문서를 먼저 읽어 병합을 마친 완전한 엔티티를
    /// 전달해야 합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 일치하는 문서가 없음
    /// * `Err(AppError::Persistence)` - 저장소 수준 실패 (NotFound와 구분)
    async fn update_one(
        &self,
        database: &str,
        collection: &str,
        place: &Place,
    ) -> Result<(), AppError>;

    /// 식별자로 장소 문서를 삭제
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 삭제된 문서가 0건
    async fn delete_one(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
    ) -> Result<(), AppError>;

    /// 제목/설명 텍스트 인덱스 기반 전문 검색
    ///
    /// 관련도 점수 내림차순으로 정렬한 뒤 skip/limit을 적용합니다.
    /// 일치 문서가 없으면 빈 목록, 쿼리 실패는 `Persistence`입니다.
    async fn search_place(
        &self,
        database: &str,
        collection: &str,
        term: &str,
        filter: Filter,
    ) -> Result<Vec<Place>, AppError>;
}

/// MongoDB 기반 장소 리포지토리
///
/// 모든 연산을 고정 시간 예산(`op_timeout`) 안에서 실행하며,
/// 예산 초과 시 [`AppError::Timeout`]으로 반환하고 재시도하지 않습니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// use std::time::Duration;
/// use crate::repositories::places::place_repo::{MongoPlaceRepository, PlaceRepository};
///
/// let repo = MongoPlaceRepository::new(db, Duration::from_secs(5));
/// repo.create_indexes("trouver", "places").await?;
///
/// let place = repo.find_one("trouver", "places", "p1").await?;
/// ```
#[derive(Clone)]
pub struct MongoPlaceRepository {
    db: Database,
    op_timeout: Duration,
}

impl MongoPlaceRepository {
    pub fn new(db: Database, op_timeout: Duration) -> Self {
        Self { db, op_timeout }
    }

    fn collection(&self, database: &str, collection: &str) -> Collection<Place> {
        self.db.database(database).collection(collection)
    }

    /// 장소 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **전문 검색 인덱스**: `title` + `description` (text)
    /// 2. **목록 정렬 인덱스**: `created_at` 오름차순 + `_id` 오름차순
    pub async fn create_indexes(&self, database: &str, collection: &str) -> Result<(), AppError> {
        let text_index = IndexModel::builder()
            .keys(doc! { "title": "text", "description": "text" })
            .options(
                IndexOptions::builder()
                    .name("title_description_text".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1, "_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_asc".to_string())
                    .build(),
            )
            .build();

        self.collection(database, collection)
            .create_indexes([text_index, created_at_index])
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PlaceRepository for MongoPlaceRepository {
    async fn insert_one(
        &self,
        database: &str,
        collection: &str,
        place: &Place,
    ) -> Result<String, AppError> {
        let insert = self.collection(database, collection).insert_one(place);

        let result = timeout(self.op_timeout, insert)
            .await
            .map_err(|_| AppError::Timeout("places.insert_one".to_string()))?
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        // 저장소가 보고한 식별자가 요청 값과 다르면 기록 무결성 실패
        match result.inserted_id {
            Bson::String(id) if id == place.id => Ok(id),
            other => Err(AppError::Persistence(format!(
                "삽입된 _id가 요청한 값과 다릅니다: {:?}",
                other
            ))),
        }
    }

    async fn find_one(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
    ) -> Result<Place, AppError> {
        let find = self
            .collection(database, collection)
            .find_one(doc! { "_id": place_id });

        let found = match timeout(self.op_timeout, find).await {
            Err(_) => return Err(AppError::Timeout("places.find_one".to_string())),
            Ok(Ok(found)) => found,
            // 디코딩 불가 문서는 존재하지 않는 것으로 취급
            Ok(Err(e)) if matches!(*e.kind, ErrorKind::BsonDeserialization(_)) => None,
            Ok(Err(e)) => return Err(AppError::Persistence(e.to_string())),
        };

        found.ok_or_else(|| AppError::NotFound("장소를 찾을 수 없습니다".to_string()))
    }

    async fn list(
        &self,
        database: &str,
        collection: &str,
        filter: Filter,
    ) -> Result<Vec<Place>, AppError> {
        if filter.limit <= 0 {
            return Ok(Vec::new());
        }

        let drain = async {
            let cursor = self
                .collection(database, collection)
                .find(doc! {})
                .sort(doc! { "created_at": 1, "_id": 1 })
                .skip(filter.skip)
                .limit(filter.limit)
                .await?;
            cursor.try_collect::<Vec<Place>>().await
        };

        match timeout(self.op_timeout, drain).await {
            Err(_) => Err(AppError::Timeout("places.list".to_string())),
            Ok(Ok(places)) => Ok(places),
            Ok(Err(e)) => Err(AppError::Persistence(e.to_string())),
        }
    }

    async fn update_one(
        &self,
        database: &str,
        collection: &str,
        place: &Place,
    ) -> Result<(), AppError> {
        let mut fields =
            bson::to_document(place).map_err(|e| AppError::Persistence(e.to_string()))?;
        // "_id"는 불변 필드라 $set 대상에서 제외
        fields.remove("_id");

        let update = self
            .collection(database, collection)
            .update_one(doc! { "_id": &place.id }, doc! { "$set": fields });

        let result = timeout(self.op_timeout, update)
            .await
            .map_err(|_| AppError::Timeout("places.update_one".to_string()))?
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("장소를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn delete_one(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
    ) -> Result<(), AppError> {
        let delete = self
            .collection(database, collection)
            .delete_one(doc! { "_id": place_id });

        let result = timeout(self.op_timeout, delete)
            .await
            .map_err(|_| AppError::Timeout("places.delete_one".to_string()))?
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("장소를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn search_place(
        &self,
        database: &str,
        collection: &str,
        term: &str,
        filter: Filter,
    ) -> Result<Vec<Place>, AppError> {
        if filter.limit <= 0 {
            return Ok(Vec::new());
        }

        let drain = async {
            let cursor = self
                .collection(database, collection)
                .find(doc! { "$text": { "$search": term } })
                .sort(doc! { "score": { "$meta": "textScore" } })
                .skip(filter.skip)
                .limit(filter.limit)
                .await?;
            cursor.try_collect::<Vec<Place>>().await
        };

        match timeout(self.op_timeout, drain).await {
            Err(_) => Err(AppError::Timeout("places.search".to_string())),
            Ok(Ok(places)) => Ok(places),
            Ok(Err(e)) => Err(AppError::Persistence(e.to_string())),
        }
    }
}
