//! # 리뷰 관리 서비스 구현
//!
//! 리뷰 자원의 생성/조회/수정/삭제를 담당합니다. 작성은 장소 경로에
//! 종속되고(`place_id`는 경로에서 결정), 수정/삭제는 리뷰 식별자만으로
//! 접근하는 평면 구조입니다.
//!
//! 소유권 판정은 장소 서비스와 동일합니다: 저장된 문서의 작성자이거나
//! 관리자일 때만 변경이 허용되며, 판정 실패 시 저장소에 접근하지 않습니다.

use std::sync::Arc;

use mongodb::bson::DateTime;
use uuid::Uuid;
use validator::Validate;

use crate::config::StoreSettings;
use crate::domain::dto::pagination::PageQuery;
use crate::domain::dto::reviews::request::{CreateReviewRequest, UpdateReviewRequest};
use crate::domain::dto::reviews::response::ReviewResponse;
use crate::domain::models::auth::Principal;
use crate::errors::AppError;
use crate::policy;
use crate::repositories::filter::Filter;
use crate::repositories::reviews::review_repo::ReviewRepository;

/// 리뷰 비즈니스 로직 서비스
///
/// 리포지토리는 트레이트 객체로 주입되며, 저장소/컬렉션 이름은
/// 설정에서 받아 보관합니다.
pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    database: String,
    collection: String,
}

impl ReviewService {
    pub fn new(review_repo: Arc<dyn ReviewRepository>, settings: &StoreSettings) -> Self {
        Self {
            review_repo,
            database: settings.database.clone(),
            collection: settings.reviews_collection.clone(),
        }
    }

    /// 장소에 새 리뷰 작성
    ///
    /// # 인자
    ///
    /// * `principal` - 인증된 요청 주체 (작성자로 기록됨)
    /// * `place_id` - 대상 장소 식별자 (경로 파라미터)
    /// * `request` - 리뷰 본문과 평점
    ///
    /// # 반환값
    ///
    /// * `Ok(ReviewResponse)` - 생성된 리뷰
    /// * `Err(AppError::Validation)` - 본문/평점 규칙 위반
    ///
    /// 대상 장소의 존재 여부는 검사하지 않습니다. 검사하더라도 삭제와
    /// 경합하면 고아 리뷰를 막을 수 없으므로, 조회 시점에 자연스럽게
    /// 걸러지는 쪽을 택했습니다.
    pub async fn create_review(
        &self,
        principal: &Principal,
        place_id: &str,
        request: CreateReviewRequest,
    ) -> Result<ReviewResponse, AppError> {
        request.validate()?;

        let review = request.into_review(
            Uuid::new_v4().to_string(),
            place_id.to_string(),
            principal.user_id.clone(),
            DateTime::now(),
        );

        self.review_repo
            .insert_one(&self.database, &self.collection, &review)
            .await?;

        log::info!("리뷰 생성됨: {} (장소: {})", review.id, review.place_id);

        Ok(ReviewResponse::from(review))
    }

    /// 식별자로 리뷰 조회
    pub async fn get_review(&self, review_id: &str) -> Result<ReviewResponse, AppError> {
        let review = self
            .review_repo
            .find_one(&self.database, &self.collection, review_id)
            .await?;

        Ok(ReviewResponse::from(review))
    }

    /// 장소의 리뷰 목록 조회 (생성 시각 오름차순)
    pub async fn list_reviews(
        &self,
        place_id: &str,
        query: &PageQuery,
    ) -> Result<Vec<ReviewResponse>, AppError> {
        let filter = Filter::from_page(query.page(), query.size());

        let reviews = self
            .review_repo
            .list(&self.database, &self.collection, place_id, filter)
            .await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    /// 리뷰 부분 수정
    ///
    /// 저장된 리뷰를 먼저 읽어 작성자를 판정한 뒤 제공된 필드만
    /// 병합합니다. 작성자도 관리자도 아니면 `Forbidden`으로 중단합니다.
    pub async fn update_review(
        &self,
        principal: &Principal,
        review_id: &str,
        request: UpdateReviewRequest,
    ) -> Result<ReviewResponse, AppError> {
        request.validate()?;

        let stored = self
            .review_repo
            .find_one(&self.database, &self.collection, review_id)
            .await?;

        if !policy::can_mutate(principal, &stored.user_id) {
            log::warn!("리뷰 수정 거부됨: {} (요청 주체: {})", review_id, principal.user_id);
            return Err(AppError::Forbidden(
                "이 리뷰를 수정할 권한이 없습니다".to_string(),
            ));
        }

        let merged = request.apply_to(&stored);

        self.review_repo
            .update_one(&self.database, &self.collection, &merged)
            .await?;

        Ok(ReviewResponse::from(merged))
    }

    /// 리뷰 삭제
    pub async fn delete_review(
        &self,
        principal: &Principal,
        review_id: &str,
    ) -> Result<(), AppError> {
        let stored = self
            .review_repo
            .find_one(&self.database, &self.collection, review_id)
            .await?;

        if !policy::can_mutate(principal, &stored.user_id) {
            log::warn!("리뷰 삭제 거부됨: {} (요청 주체: {})", review_id, principal.user_id);
            return Err(AppError::Forbidden(
                "이 리뷰를 삭제할 권한이 없습니다".to_string(),
            ));
        }

        self.review_repo
            .delete_one(&self.database, &self.collection, review_id)
            .await?;

        log::info!("리뷰 삭제됨: {}", review_id);

        Ok(())
    }
}
