//! 장소 부분 수정 요청 DTO
//!
//! 저장된 장소 문서와 병합되는 부분 수정 요청을 정의합니다.
//! 모든 필드가 `Option`이므로 "값 없음"과 "빈 값"이 구분되며,
//! 생략된 필드가 저장된 값을 지우는 일이 없습니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::places::place::{Location, Place};

/// 장소 부분 수정을 위한 요청 DTO
///
/// 생략(`None`)된 필드는 저장된 값을 유지합니다. `location`이 제공되면
/// 주소/좌표 서브문서 전체가 교체됩니다. 식별자, 소유자, 생성 시각은
/// 요청에 존재하지 않으며 항상 저장된 문서의 값이 유지됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    /// 장소 이름 (제공 시 1-150자)
    #[validate(length(
        min = 1,
        max = 150,
        message = "장소 이름은 1-150자 사이여야 합니다"
    ))]
    pub title: Option<String>,

    /// 장소 설명 (제공 시 1-150자)
    #[validate(length(
        min = 1,
        max = 150,
        message = "장소 설명은 1-150자 사이여야 합니다"
    ))]
    pub description: Option<String>,

    /// 카테고리 목록 (제공 시 최대 5개, 전체 교체)
    #[validate(length(max = 5, message = "카테고리는 최대 5개까지 지정할 수 있습니다"))]
    pub categories: Option<Vec<String>>,

    /// 대표 이미지 URL
    #[validate(url(message = "유효한 이미지 URL을 입력해주세요"))]
    pub image_url: Option<String>,

    /// 전화번호 (제공 시 최대 20자)
    #[validate(length(max = 20, message = "전화번호는 최대 20자까지 입력할 수 있습니다"))]
    pub phone_number: Option<String>,

    /// 연락 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 주소/좌표 정보 (제공 시 서브문서 전체 교체)
    #[validate(nested)]
    pub location: Option<Location>,
}

impl UpdatePlaceRequest {
    /// 저장된 문서와 병합하여 갱신된 엔티티를 생성
    ///
    /// 요청에 없는 필드는 저장된 값을 유지하고, 식별자와 소유자,
    /// 생성 시각은 항상 저장된 문서의 값을 따릅니다.
    pub fn apply_to(self, stored: &Place) -> Place {
        Place {
            id: stored.id.clone(),
            user_id: stored.user_id.clone(),
            title: self.title.unwrap_or_else(|| stored.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| stored.description.clone()),
            categories: self
                .categories
                .unwrap_or_else(|| stored.categories.clone()),
            image_url: self.image_url.or_else(|| stored.image_url.clone()),
            phone_number: self
                .phone_number
                .or_else(|| stored.phone_number.clone()),
            email: self.email.or_else(|| stored.email.clone()),
            location: self.location.or_else(|| stored.location.clone()),
            created_at: stored.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::places::place::{Address, GeoPoint};
    use mongodb::bson::DateTime;

    fn empty_request() -> UpdatePlaceRequest {
        UpdatePlaceRequest {
            title: None,
            description: None,
            categories: None,
            image_url: None,
            phone_number: None,
            email: None,
            location: None,
        }
    }

    fn stored_place() -> Place {
        Place {
            id: "p1".to_string(),
            user_id: "u1".to_string(),
            title: "강남 커피집".to_string(),
            description: "조용한 분위기의 스페셜티 카페".to_string(),
            categories: vec!["cafe".to_string()],
            image_url: Some("https://img.example.com/cafe.jpg".to_string()),
            phone_number: Some("02-1234-5678".to_string()),
            email: None,
            location: Some(Location {
                address: Some(Address {
                    street_1: Some("테헤란로 123".to_string()),
                    city: Some("서울".to_string()),
                    state: None,
                    zip_code: Some("06133".to_string()),
                }),
                geo: Some(GeoPoint {
                    geo_type: "Point".to_string(),
                    coordinates: vec![127.0276, 37.4979],
                }),
            }),
            created_at: DateTime::from_millis(1_700_000_000_000),
        }
    }

    #[test]
    fn test_empty_request_keeps_stored_document() {
        let stored = stored_place();

        let merged = empty_request().apply_to(&stored);

        assert_eq!(merged, stored);
    }

    #[test]
    fn test_present_fields_replace_absent_fields_survive() {
        let stored = stored_place();
        let request = UpdatePlaceRequest {
            title: Some("강남 커피집 (리뉴얼)".to_string()),
            categories: Some(vec!["cafe".to_string(), "bakery".to_string()]),
            ..empty_request()
        };

        let merged = request.apply_to(&stored);

        assert_eq!(merged.title, "강남 커피집 (리뉴얼)");
        assert_eq!(merged.categories.len(), 2);
        assert_eq!(merged.description, stored.description);
        assert_eq!(merged.image_url, stored.image_url);
        assert_eq!(merged.phone_number, stored.phone_number);
    }

    #[test]
    fn test_identity_and_owner_always_preserved() {
        let stored = stored_place();
        let request = UpdatePlaceRequest {
            title: Some("다른 이름".to_string()),
            ..empty_request()
        };

        let merged = request.apply_to(&stored);

        assert_eq!(merged.id, "p1");
        assert_eq!(merged.user_id, "u1");
        assert_eq!(merged.created_at, stored.created_at);
    }

    #[test]
    fn test_location_replaced_wholesale() {
        let stored = stored_place();
        let request = UpdatePlaceRequest {
            location: Some(Location {
                address: None,
                geo: Some(GeoPoint {
                    geo_type: "Point".to_string(),
                    coordinates: vec![126.9780, 37.5665],
                }),
            }),
            ..empty_request()
        };

        let merged = request.apply_to(&stored);
        let location = merged.location.unwrap();

        assert!(location.address.is_none());
        assert_eq!(location.geo.unwrap().coordinates, vec![126.9780, 37.5665]);
    }

    #[test]
    fn test_provided_fields_are_still_validated() {
        let request = UpdatePlaceRequest {
            title: Some("".to_string()),
            ..empty_request()
        };
        assert!(request.validate().is_err());

        assert!(empty_request().validate().is_ok());
    }
}
