//! Place Entity Implementation
//!
//! 장소 엔티티의 핵심 구현체입니다.
//! MongoDB `places` 컬렉션의 문서 구조와 위치 관련 값 객체를 정의합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// 장소 엔티티
///
/// `places` 컬렉션에 저장되는 문서 구조입니다. `id`는 코어가 할당한
/// UUID v4 문자열이며 BSON `_id` 필드로 저장됩니다. `user_id`는 생성
/// 시점의 인증 주체로 고정되며 이후 어떤 수정 경로로도 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// 문서 식별자 (UUID v4, BSON `_id`)
    #[serde(rename = "_id")]
    pub id: String,
    /// 소유자 사용자 ID (생성 이후 불변)
    pub user_id: String,
    /// 장소 이름
    pub title: String,
    /// 장소 설명
    pub description: String,
    /// 분류 카테고리 (최대 5개)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// 대표 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 연락처 전화번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// 연락처 이메일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 주소 및 좌표 정보
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// 생성 시간
    pub created_at: DateTime,
}

/// 장소의 위치 정보 값 객체
///
/// 주소와 좌표는 서로 독립적으로 존재할 수 있습니다.
/// 요청 DTO에서도 같은 타입을 그대로 사용하며, 중첩 검증을 통해
/// 내부 필드의 위반 사항이 상위 검증 결과로 수집됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    /// 주소 구성 요소
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub address: Option<Address>,
    /// GeoJSON 좌표
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub geo: Option<GeoPoint>,
}

/// 주소 값 객체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Address {
    /// 도로명 주소 첫 줄
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "street_1은 30자 이하여야 합니다"))]
    pub street_1: Option<String>,
    /// 도시
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "도시명은 30자 이하여야 합니다"))]
    pub city: Option<String>,
    /// 주/도
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "주/도명은 30자 이하여야 합니다"))]
    pub state: Option<String>,
    /// 우편번호
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "우편번호는 30자 이하여야 합니다"))]
    pub zip_code: Option<String>,
}

/// GeoJSON 포인트 값 객체
///
/// 좌표는 GeoJSON 순서인 `[경도, 위도]` 2쌍이어야 합니다.
/// 경도는 [-180, 180], 위도는 [-90, 90] 범위를 축별로 독립 검증하며,
/// 두 축이 모두 범위를 벗어나면 두 건의 위반이 함께 수집됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// GeoJSON 타입 (예: "Point")
    #[serde(rename = "type")]
    pub geo_type: String,
    /// `[경도, 위도]` 좌표쌍
    pub coordinates: Vec<f64>,
}

impl Validate for GeoPoint {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.geo_type.chars().count() > 30 {
            errors.add(
                "type",
                ValidationError::new("length")
                    .with_message("지오 타입은 30자 이하여야 합니다".into()),
            );
        }

        if self.coordinates.len() != 2 {
            errors.add(
                "coordinates",
                ValidationError::new("coordinate_pair")
                    .with_message("좌표는 [경도, 위도] 2쌍이어야 합니다".into()),
            );
        } else {
            let longitude = self.coordinates[0];
            let latitude = self.coordinates[1];

            if !(-180.0..=180.0).contains(&longitude) {
                errors.add(
                    "coordinates",
                    ValidationError::new("longitude_out_of_range")
                        .with_message("경도는 -180과 180 사이여야 합니다".into()),
                );
            }

            if !(-90.0..=90.0).contains(&latitude) {
                errors.add(
                    "coordinates",
                    ValidationError::new("latitude_out_of_range")
                        .with_message("위도는 -90과 90 사이여야 합니다".into()),
                );
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
