//! # 장소 관리 서비스 구현
//!
//! 장소 자원의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 모든 변경 연산은 검증 → 소유권 판정 → 저장소 연산 순서로 진행되며,
//! 첫 실패 지점에서 부작용 없이 중단됩니다.
//!
//! ## 요청 흐름
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │  Validation  │ → │    Policy    │ → │    Repository    │
//! │              │   │              │   │                  │
//! │ • 필드 규칙  │   │ • 소유자 판정│   │ • 네임스페이스   │
//! │ • 좌표 범위  │   │ • 관리자 우회│   │ • 데드라인       │
//! │ • 전체 수집  │   │ • 저장 소유자│   │ • 무결성 검증    │
//! └──────────────┘   └──────────────┘   └──────────────────┘
//! ```
//!
//! ## 소유권 규칙
//!
//! 수정/삭제 판정은 항상 *저장된 문서의* 소유자를 기준으로 합니다.
//! 요청 본문에는 소유자 필드가 존재하지 않으므로, 조작된 본문으로
//! 소유권을 넘겨받는 것은 불가능합니다.

use std::sync::Arc;

use mongodb::bson::DateTime;
use uuid::Uuid;
use validator::Validate;

use crate::config::StoreSettings;
use crate::domain::dto::pagination::{PageQuery, SearchQuery};
use crate::domain::dto::places::request::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::domain::dto::places::response::PlaceResponse;
use crate::domain::models::auth::Principal;
use crate::errors::AppError;
use crate::policy;
use crate::repositories::filter::Filter;
use crate::repositories::places::place_repo::PlaceRepository;

/// 장소 비즈니스 로직 서비스
///
/// 리포지토리는 트레이트 객체로 주입되므로 테스트에서는 인메모리
/// 구현으로 교체됩니다. 저장소/컬렉션 이름은 설정에서 받아 보관하고
/// 모든 저장소 호출에 명시적으로 전달합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::services::places::place_service::PlaceService;
///
/// let service = PlaceService::new(Arc::new(mongo_repo), &config.store);
///
/// let created = service.create_place(&principal, request).await?;
/// let fetched = service.get_place(&created.id).await?;
/// ```
pub struct PlaceService {
    place_repo: Arc<dyn PlaceRepository>,
    database: String,
    collection: String,
}

impl PlaceService {
    pub fn new(place_repo: Arc<dyn PlaceRepository>, settings: &StoreSettings) -> Self {
        Self {
            place_repo,
            database: settings.database.clone(),
            collection: settings.places_collection.clone(),
        }
    }

    /// 새 장소 등록
    ///
    /// # 인자
    ///
    /// * `principal` - 인증된 요청 주체 (소유자로 기록됨)
    /// * `request` - 장소 생성 요청 데이터
    ///
    /// # 반환값
    ///
    /// * `Ok(PlaceResponse)` - 생성된 장소 (서버가 부여한 식별자 포함)
    /// * `Err(AppError::Validation)` - 필드 규칙 위반 (전체 수집)
    /// * `Err(AppError::Persistence)` - 저장 실패 또는 식별자 불일치
    ///
    /// # 처리 과정
    ///
    /// 1. 요청 본문 검증 (위반 필드 전체 수집)
    /// 2. UUID 식별자, 주체의 사용자 ID, 현재 시각 부여
    /// 3. 저장소에 기록하고 식별자 에코 확인
    pub async fn create_place(
        &self,
        principal: &Principal,
        request: CreatePlaceRequest,
    ) -> Result<PlaceResponse, AppError> {
        request.validate()?;

        // 식별자와 소유자는 서버가 부여하며, 이후 변경되지 않는다
        let place = request.into_place(
            Uuid::new_v4().to_string(),
            principal.user_id.clone(),
            DateTime::now(),
        );

        self.place_repo
            .insert_one(&self.database, &self.collection, &place)
            .await?;

        log::info!("장소 생성됨: {} (소유자: {})", place.id, place.user_id);

        Ok(PlaceResponse::from(place))
    }

    /// 식별자로 장소 조회
    pub async fn get_place(&self, place_id: &str) -> Result<PlaceResponse, AppError> {
        let place = self
            .place_repo
            .find_one(&self.database, &self.collection, place_id)
            .await?;

        Ok(PlaceResponse::from(place))
    }

    /// 장소 목록 조회 (생성 시각 오름차순)
    pub async fn list_places(&self, query: &PageQuery) -> Result<Vec<PlaceResponse>, AppError> {
        let filter = Filter::from_page(query.page(), query.size());

        let places = self
            .place_repo
            .list(&self.database, &self.collection, filter)
            .await?;

        Ok(places.into_iter().map(PlaceResponse::from).collect())
    }

    /// 장소 부분 수정
    ///
    /// 저장된 문서를 먼저 읽어 소유권을 판정한 뒤, 요청에 제공된
    /// 필드만 병합하여 다시 기록합니다. 생략된 필드는 유지됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(PlaceResponse)` - 병합이 반영된 장소
    /// * `Err(AppError::NotFound)` - 대상 문서 없음
    /// * `Err(AppError::Forbidden)` - 소유자도 관리자도 아님 (저장소 미접근)
    pub async fn update_place(
        &self,
        principal: &Principal,
        place_id: &str,
        request: UpdatePlaceRequest,
    ) -> Result<PlaceResponse, AppError> {
        request.validate()?;

        // 소유권은 저장된 문서의 소유자 기준으로 판정
        let stored = self
            .place_repo
            .find_one(&self.database, &self.collection, place_id)
            .await?;

        if !policy::can_mutate(principal, &stored.user_id) {
            log::warn!("장소 수정 거부됨: {} (요청 주체: {})", place_id, principal.user_id);
            return Err(AppError::Forbidden(
                "이 장소를 수정할 권한이 없습니다".to_string(),
            ));
        }

        let merged = request.apply_to(&stored);

        self.place_repo
            .update_one(&self.database, &self.collection, &merged)
            .await?;

        Ok(PlaceResponse::from(merged))
    }

    /// 장소 삭제
    ///
    /// 저장된 문서를 먼저 읽어 소유권을 판정합니다. 권한이 없으면
    /// 저장소를 건드리지 않고 `Forbidden`으로 중단합니다.
    pub async fn delete_place(&self, principal: &Principal, place_id: &str) -> Result<(), AppError> {
        let stored = self
            .place_repo
            .find_one(&self.database, &self.collection, place_id)
            .await?;

        if !policy::can_mutate(principal, &stored.user_id) {
            log::warn!("장소 삭제 거부됨: {} (요청 주체: {})", place_id, principal.user_id);
            return Err(AppError::Forbidden(
                "이 장소를 삭제할 권한이 없습니다".to_string(),
            ));
        }

        self.place_repo
            .delete_one(&self.database, &self.collection, place_id)
            .await?;

        log::info!("장소 삭제됨: {}", place_id);

        Ok(())
    }

    /// 장소 전문 검색 (관련도 내림차순)
    pub async fn search_places(&self, query: &SearchQuery) -> Result<Vec<PlaceResponse>, AppError> {
        query.validate()?;

        let filter = Filter::from_page(query.page(), query.size());

        let places = self
            .place_repo
            .search_place(&self.database, &self.collection, &query.q, filter)
            .await?;

        Ok(places.into_iter().map(PlaceResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::Role;
    use crate::repositories::memory::MemoryPlaceRepository;
    use std::time::Duration;

    fn test_settings() -> StoreSettings {
        StoreSettings {
            uri: "mongodb://localhost:27017".to_string(),
            database: "trouver".to_string(),
            places_collection: "places".to_string(),
            reviews_collection: "reviews".to_string(),
            op_timeout: Duration::from_secs(5),
        }
    }

    fn service() -> PlaceService {
        PlaceService::new(Arc::new(MemoryPlaceRepository::new()), &test_settings())
    }

    fn user(id: &str) -> Principal {
        Principal {
            user_id: id.to_string(),
            role: Role::User,
        }
    }

    fn admin(id: &str) -> Principal {
        Principal {
            user_id: id.to_string(),
            role: Role::Admin,
        }
    }

    fn cafe_request() -> CreatePlaceRequest {
        CreatePlaceRequest {
            title: "Cafe X".to_string(),
            description: "Coffee".to_string(),
            categories: vec!["food".to_string()],
            image_url: None,
            phone_number: None,
            email: None,
            location: None,
        }
    }

    fn empty_update() -> UpdatePlaceRequest {
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

    #[tokio::test]
    async fn test_create_assigns_identity_and_owner() {
        let service = service();

        let created = service.create_place(&user("u1"), cafe_request()).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.user_id, "u1");

        let fetched = service.get_place(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Cafe X");
        assert_eq!(fetched.user_id, "u1");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload() {
        let service = service();
        let request = CreatePlaceRequest {
            title: "".to_string(),
            ..cafe_request()
        };

        let err = service.create_place(&user("u1"), request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_by_other_user_is_forbidden_and_unchanged() {
        let service = service();
        let created = service.create_place(&user("u1"), cafe_request()).await.unwrap();

        let request = UpdatePlaceRequest {
            title: Some("탈취된 카페".to_string()),
            ..empty_update()
        };
        let err = service
            .update_place(&user("u2"), &created.id, request)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));

        let fetched = service.get_place(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Cafe X");
    }

    #[tokio::test]
    async fn test_update_by_owner_merges_provided_fields() {
        let service = service();
        let created = service.create_place(&user("u1"), cafe_request()).await.unwrap();

        let request = UpdatePlaceRequest {
            title: Some("Cafe X 리뉴얼".to_string()),
            ..empty_update()
        };
        let updated = service
            .update_place(&user("u1"), &created.id, request)
            .await
            .unwrap();

        assert_eq!(updated.title, "Cafe X 리뉴얼");
        assert_eq!(updated.description, "Coffee");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_admin_can_update_any_place_owner_preserved() {
        let service = service();
        let created = service.create_place(&user("u1"), cafe_request()).await.unwrap();

        let request = UpdatePlaceRequest {
            description: Some("Specialty coffee".to_string()),
            ..empty_update()
        };
        let updated = service
            .update_place(&admin("admin-1"), &created.id, request)
            .await
            .unwrap();

        assert_eq!(updated.description, "Specialty coffee");
        // 관리자가 수정해도 소유자는 바뀌지 않는다
        assert_eq!(updated.user_id, "u1");
    }

    #[tokio::test]
    async fn test_delete_by_other_user_forbidden_document_remains() {
        let service = service();
        let created = service.create_place(&user("u1"), cafe_request()).await.unwrap();

        let err = service.delete_place(&user("u2"), &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert!(service.get_place(&created.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_by_owner_removes_document() {
        let service = service();
        let created = service.create_place(&user("u1"), cafe_request()).await.unwrap();

        service.delete_place(&user("u1"), &created.id).await.unwrap();

        let err = service.get_place(&created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_admin_can_delete_any_place() {
        let service = service();
        let created = service.create_place(&user("u1"), cafe_request()).await.unwrap();

        service.delete_place(&admin("admin-1"), &created.id).await.unwrap();
        assert!(service.get_place(&created.id).await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_place_is_not_found() {
        let service = service();

        let err = service
            .update_place(&user("u1"), "ghost", empty_update())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_uses_query_defaults() {
        let service = service();
        for _ in 0..3 {
            service.create_place(&user("u1"), cafe_request()).await.unwrap();
        }

        let query = PageQuery {
            page: None,
            size: None,
        };
        let places = service.list_places(&query).await.unwrap();

        assert_eq!(places.len(), 3);
    }

    #[tokio::test]
    async fn test_search_rejects_blank_term() {
        let service = service();
        let query = SearchQuery {
            q: "  ".to_string(),
            page: None,
            size: None,
        };

        let err = service.search_places(&query).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_search_returns_matches_only() {
        let service = service();
        service.create_place(&user("u1"), cafe_request()).await.unwrap();
        service
            .create_place(
                &user("u1"),
                CreatePlaceRequest {
                    title: "Pizza place".to_string(),
                    description: "Napoli style".to_string(),
                    ..cafe_request()
                },
            )
            .await
            .unwrap();

        let query = SearchQuery {
            q: "coffee".to_string(),
            page: None,
            size: None,
        };
        let hits = service.search_places(&query).await.unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Cafe X");
    }
}
