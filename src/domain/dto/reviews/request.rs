//! 리뷰 생성/수정 요청 DTO
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::reviews::review::Review;

/// 리뷰 작성 요청 DTO
///
/// 대상 장소는 경로 파라미터에서, 작성자는 인증 주체에서 결정되므로
/// 본문에는 내용과 평점만 담깁니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    /// 리뷰 본문 (1-1000자)
    #[validate(length(
        min = 1,
        max = 1000,
        message = "리뷰 내용은 1-1000자 사이여야 합니다"
    ))]
    pub content: String,

    /// 평점 (1.0-5.0)
    #[validate(range(min = 1.0, max = 5.0, message = "평점은 1.0-5.0 사이여야 합니다"))]
    pub rating: f64,
}

impl CreateReviewRequest {
    /// 서버가 부여한 식별자/대상 장소/작성자/생성 시각과 합쳐 엔티티를 생성
    pub fn into_review(
        self,
        id: String,
        place_id: String,
        user_id: String,
        created_at: DateTime,
    ) -> Review {
        Review {
            id,
            place_id,
            user_id,
            content: self.content,
            rating: self.rating,
            created_at,
        }
    }
}

/// 리뷰 부분 수정 요청 DTO
///
/// 생략된 필드는 저장된 값을 유지합니다. 식별자, 대상 장소, 작성자,
/// 생성 시각은 항상 저장된 문서의 값이 유지됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    /// 리뷰 본문 (제공 시 1-1000자)
    #[validate(length(
        min = 1,
        max = 1000,
        message = "리뷰 내용은 1-1000자 사이여야 합니다"
    ))]
    pub content: Option<String>,

    /// 평점 (제공 시 1.0-5.0)
    #[validate(range(min = 1.0, max = 5.0, message = "평점은 1.0-5.0 사이여야 합니다"))]
    pub rating: Option<f64>,
}

impl UpdateReviewRequest {
    /// 저장된 문서와 병합하여 갱신된 엔티티를 생성
    pub fn apply_to(self, stored: &Review) -> Review {
        Review {
            id: stored.id.clone(),
            place_id: stored.place_id.clone(),
            user_id: stored.user_id.clone(),
            content: self.content.unwrap_or_else(|| stored.content.clone()),
            rating: self.rating.unwrap_or(stored.rating),
            created_at: stored.created_at,
        }
    }
}
