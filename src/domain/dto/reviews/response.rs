use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::reviews::review::Review;

/// 리뷰 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub content: String,
    pub rating: f64,

    /// 생성 시각 (RFC 3339 문자열로 직렬화)
    #[serde(with = "mongodb::bson::serde_helpers::bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        let Review {
            id,
            place_id,
            user_id,
            content,
            rating,
            created_at,
        } = review;

        Self {
            id,
            place_id,
            user_id,
            content,
            rating,
            created_at,
        }
    }
}
