//! 장소 생성 요청 DTO
//!
//! 새로운 장소 등록을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::places::place::{Location, Place};

/// 새로운 장소 등록을 위한 요청 DTO
///
/// 식별자와 소유자, 생성 시각은 요청에 포함되지 않으며 서버가 채웁니다.
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    /// 장소 이름 (필수, 최대 150자)
    #[validate(length(
        min = 1,
        max = 150,
        message = "장소 이름은 1-150자 사이여야 합니다"
    ))]
    pub title: String,

    /// 장소 설명 (필수, 최대 150자)
    #[validate(length(
        min = 1,
        max = 150,
        message = "장소 설명은 1-150자 사이여야 합니다"
    ))]
    pub description: String,

    /// 카테고리 목록 (최대 5개)
    #[validate(length(max = 5, message = "카테고리는 최대 5개까지 지정할 수 있습니다"))]
    #[serde(default)]
    pub categories: Vec<String>,

    /// 대표 이미지 URL
    #[validate(url(message = "유효한 이미지 URL을 입력해주세요"))]
    pub image_url: Option<String>,

    /// 전화번호 (최대 20자)
    #[validate(length(max = 20, message = "전화번호는 최대 20자까지 입력할 수 있습니다"))]
    pub phone_number: Option<String>,

    /// 연락 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 주소/좌표 정보
    #[validate(nested)]
    pub location: Option<Location>,
}

impl CreatePlaceRequest {
    /// 서버가 부여한 식별자/소유자/생성 시각과 합쳐 장소 엔티티를 생성
    pub fn into_place(self, id: String, user_id: String, created_at: DateTime) -> Place {
        Place {
            id,
            user_id,
            title: self.title,
            description: self.description,
            categories: self.categories,
            image_url: self.image_url,
            phone_number: self.phone_number,
            email: self.email,
            location: self.location,
            created_at,
        }
    }
}
