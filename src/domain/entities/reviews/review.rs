//! Review Entity Implementation
//!
//! 리뷰 엔티티의 핵심 구현체입니다.
//! MongoDB `reviews` 컬렉션의 문서 구조를 정의합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 리뷰 엔티티
///
/// `reviews` 컬렉션에 저장되는 문서 구조입니다. `place_id`는 리뷰 대상
/// 장소를 가리키는 관례상의 참조이며, 저장소가 실제 장소의 존재를
/// 보장하지는 않습니다. `id`, `place_id`, `user_id`는 생성 이후 불변입니다.
///
/// 리뷰 본문은 `content` 필드로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// 문서 식별자 (UUID v4, BSON `_id`)
    #[serde(rename = "_id")]
    pub id: String,
    /// 리뷰 대상 장소 ID (생성 이후 불변)
    pub place_id: String,
    /// 작성자 사용자 ID (생성 이후 불변)
    pub user_id: String,
    /// 리뷰 본문
    pub content: String,
    /// 평점 (1.0 - 5.0)
    pub rating: f64,
    /// 생성 시간
    pub created_at: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{from_document, to_document};

    fn sample_review() -> Review {
        Review {
            id: "5f9c2f6e-28cc-4f5c-a6bd-0cb24ad05646".to_string(),
            place_id: "0d3509e3-8664-4be5-a5b3-4f1e4bff65b5".to_string(),
            user_id: "user-2".to_string(),
            content: "커피가 훌륭하고 자리가 넉넉합니다".to_string(),
            rating: 4.5,
            created_at: DateTime::from_millis(1_700_000_100_000),
        }
    }

    #[test]
    fn test_review_serializes_id_as_underscore_id() {
        let doc = to_document(&sample_review()).unwrap();

        assert!(doc.contains_key("_id"));
        assert!(!doc.contains_key("id"));
    }

    /// 리뷰 본문은 `content`로 직렬화되어야 합니다.
    #[test]
    fn test_review_content_field_name() {
        let doc = to_document(&sample_review()).unwrap();

        assert!(doc.contains_key("content"));
        assert!(!doc.contains_key("title"));
        assert_eq!(
            doc.get_str("content").unwrap(),
            "커피가 훌륭하고 자리가 넉넉합니다"
        );
    }

    #[test]
    fn test_review_document_round_trip_preserves_content() {
        let review = sample_review();

        let doc = to_document(&review).unwrap();
        let decoded: Review = from_document(doc).unwrap();

        assert_eq!(decoded, review);
    }
}
