//! # 리뷰 리포지토리 구현
//!
//! 리뷰 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 장소 리포지토리와 같은 계약 구조를 따르되, 목록 조회가 대상 장소
//! (`place_id`) 기준이고 전문 검색이 없다는 점이 다릅니다.

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
use crate::domain::entities::reviews::review::Review;
use crate::errors::AppError;
use crate::repositories::filter::Filter;

/// 리뷰 저장소 계약
///
/// 저장소/컬렉션 이름은 호출 시점에 받습니다. 에러 계약과 정렬 보장은
/// 장소 저장소와 동일합니다: 목록은 생성 시각 오름차순에 `_id` 오름차순
/// 동률 처리, 문서 없음은 `NotFound`, 저장소 실패는 `Persistence`,
/// 시간 예산 초과는 `Timeout`입니다.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// 새 리뷰 문서를 저장
    ///
    /// 식별자는 호출자가 미리 부여하며, 저장소가 보고한 식별자가
    /// 요청 값과 다르면 기록 무결성 실패로 간주합니다.
    async fn insert_one(
        &self,
        database: &str,
        collection: &str,
        review: &Review,
    ) -> Result<String, AppError>;

    /// 식별자로 리뷰 문서를 조회
    async fn find_one(
        &self,
        database: &str,
        collection: &str,
        review_id: &str,
    ) -> Result<Review, AppError>;

    /// 대상 장소의 리뷰 문서 목록을 조회
    ///
    /// `place_id`가 일치하는 문서만 대상으로 skip/limit을 적용합니다.
    /// 일치 문서가 없으면 빈 목록이며, `limit`이 0 이하이면 저장소를
    /// 조회하지 않습니다.
    async fn list(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
        filter: Filter,
    ) -> Result<Vec<Review>, AppError>;

    /// 저장된 리뷰 문서를 병합 갱신
    ///
    /// 호출자는 저장된 문서를 먼저 읽어 병합을 마친 완전한 엔티티를
    /// 전달해야 합니다.
    async fn update_one(
        &self,
        database: &str,
        collection: &str,
        review: &Review,
    ) -> Result<(), AppError>;

    /// 식별자로 리뷰 문서를 삭제
    async fn delete_one(
        &self,
        database: &str,
        collection: &str,
        review_id: &str,
    ) -> Result<(), AppError>;
}

/// MongoDB 기반 리뷰 리포지토리
#[derive(Clone)]
pub struct MongoReviewRepository {
    db: Database,
    op_timeout: Duration,
}

impl MongoReviewRepository {
    pub fn new(db: Database, op_timeout: Duration) -> Self {
        Self { db, op_timeout }
    }

    fn collection(&self, database: &str, collection: &str) -> Collection<Review> {
        self.db.database(database).collection(collection)
    }

    /// 리뷰 컬렉션 인덱스 생성
    ///
    /// 장소 기준 목록 조회를 위한 `place_id` + `created_at` 복합 인덱스를
    /// 생성합니다. 애플리케이션 초기화 시점에 한 번 호출합니다.
    pub async fn create_indexes(&self, database: &str, collection: &str) -> Result<(), AppError> {
        let place_id_index = IndexModel::builder()
            .keys(doc! { "place_id": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("place_id_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection(database, collection)
            .create_indexes([place_id_index])
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn insert_one(
        &self,
        database: &str,
        collection: &str,
        review: &Review,
    ) -> Result<String, AppError> {
        let insert = self.collection(database, collection).insert_one(review);

        let result = timeout(self.op_timeout, insert)
            .await
            .map_err(|_| AppError::Timeout("reviews.insert_one".to_string()))?
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        match result.inserted_id {
            Bson::String(id) if id == review.id => Ok(id),
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
        review_id: &str,
    ) -> Result<Review, AppError> {
        let find = self
            .collection(database, collection)
            .find_one(doc! { "_id": review_id });

        let found = match timeout(self.op_timeout, find).await {
            Err(_) => return Err(AppError::Timeout("reviews.find_one".to_string())),
            Ok(Ok(found)) => found,
            Ok(Err(e)) if matches!(*e.kind, ErrorKind::BsonDeserialization(_)) => None,
            Ok(Err(e)) => return Err(AppError::Persistence(e.to_string())),
        };

        found.ok_or_else(|| AppError::NotFound("리뷰를 찾을 수 없습니다".to_string()))
    }

    async fn list(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
        filter: Filter,
    ) -> Result<Vec<Review>, AppError> {
        if filter.limit <= 0 {
            return Ok(Vec::new());
        }

        let drain = async {
            let cursor = self
                .collection(database, collection)
                .find(doc! { "place_id": place_id })
                .sort(doc! { "created_at": 1, "_id": 1 })
                .skip(filter.skip)
                .limit(filter.limit)
                .await?;
            cursor.try_collect::<Vec<Review>>().await
        };

        match timeout(self.op_timeout, drain).await {
            Err(_) => Err(AppError::Timeout("reviews.list".to_string())),
            Ok(Ok(reviews)) => Ok(reviews),
            Ok(Err(e)) => Err(AppError::Persistence(e.to_string())),
        }
    }

    async fn update_one(
        &self,
        database: &str,
        collection: &str,
        review: &Review,
    ) -> Result<(), AppError> {
        let mut fields =
            bson::to_document(review).map_err(|e| AppError::Persistence(e.to_string()))?;
        fields.remove("_id");

        let update = self
            .collection(database, collection)
            .update_one(doc! { "_id": &review.id }, doc! { "$set": fields });

        let result = timeout(self.op_timeout, update)
            .await
            .map_err(|_| AppError::Timeout("reviews.update_one".to_string()))?
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("리뷰를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn delete_one(
        &self,
        database: &str,
        collection: &str,
        review_id: &str,
    ) -> Result<(), AppError> {
        let delete = self
            .collection(database, collection)
            .delete_one(doc! { "_id": review_id });

        let result = timeout(self.op_timeout, delete)
            .await
            .map_err(|_| AppError::Timeout("reviews.delete_one".to_string()))?
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("리뷰를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}
