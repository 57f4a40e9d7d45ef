use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::places::place::{Location, Place};

/// 장소 응답 DTO
///
/// 저장 필드명 `_id` 대신 `id`로 식별자를 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// 생성 시각 (RFC 3339 문자열로 직렬화)
    #[serde(with = "mongodb::bson::serde_helpers::bson_datetime_as_rfc3339_string")]
    pub created_at: DateTime,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        let Place {
            id,
            user_id,
            title,
            description,
            categories,
            image_url,
            phone_number,
            email,
            location,
            created_at,
        } = place;

        Self {
            id,
            user_id,
            title,
            description,
            categories,
            image_url,
            phone_number,
            email,
            location,
            created_at,
        }
    }
}
