//! 테스트용 인메모리 리포지토리 구현
//!
//! MongoDB 없이 서비스/정책 흐름을 검증하기 위한 대체 저장소입니다.
//! 트레이트 계약(네임스페이스 분리, 정렬 보장, 에러 계약)을 실제 구현과
//! 동일하게 따르므로, 상위 계층 테스트가 저장소 종류와 무관하게 동작합니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::places::place::Place;
use crate::domain::entities::reviews::review::Review;
use crate::errors::AppError;
use crate::repositories::filter::Filter;
use crate::repositories::places::place_repo::PlaceRepository;
use crate::repositories::reviews::review_repo::ReviewRepository;

type Namespace = (String, String);

fn namespace(database: &str, collection: &str) -> Namespace {
    (database.to_string(), collection.to_string())
}

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

/// 인메모리 장소 저장소
#[derive(Default)]
pub struct MemoryPlaceRepository {
    stores: Mutex<HashMap<Namespace, Vec<Place>>>,
}

impl MemoryPlaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceRepository for MemoryPlaceRepository {
    async fn insert_one(
        &self,
        database: &str,
        collection: &str,
        place: &Place,
    ) -> Result<String, AppError> {
        let mut stores = self.stores.lock().unwrap();
        let store = stores.entry(namespace(database, collection)).or_default();

        if store.iter().any(|existing| existing.id == place.id) {
            return Err(AppError::Persistence(format!(
                "중복된 _id: {}",
                place.id
            )));
        }

        store.push(place.clone());
        Ok(place.id.clone())
    }

    async fn find_one(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
    ) -> Result<Place, AppError> {
        let stores = self.stores.lock().unwrap();

        stores
            .get(&namespace(database, collection))
            .and_then(|store| store.iter().find(|place| place.id == place_id))
            .cloned()
            .ok_or_else(|| AppError::NotFound("장소를 찾을 수 없습니다".to_string()))
    }

    async fn list(
        &self,
        database: &str,
        collection: &str,
        filter: Filter,
    ) -> Result<Vec<Place>, AppError> {
        if filter.limit <= 0 {
            return Ok(Vec::new());
        }

        let stores = self.stores.lock().unwrap();
        let mut places = stores
            .get(&namespace(database, collection))
            .cloned()
            .unwrap_or_default();

        places.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(places
            .into_iter()
            .skip(filter.skip as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn update_one(
        &self,
        database: &str,
        collection: &str,
        place: &Place,
    ) -> Result<(), AppError> {
        let mut stores = self.stores.lock().unwrap();
        let store = stores.entry(namespace(database, collection)).or_default();

        match store.iter_mut().find(|stored| stored.id == place.id) {
            Some(stored) => {
                *stored = place.clone();
                Ok(())
            }
            None => Err(AppError::NotFound("장소를 찾을 수 없습니다".to_string())),
        }
    }

    async fn delete_one(
        &self,
        database: &str,
        collection: &str,
        place_id: &str,
    ) -> Result<(), AppError> {
        let mut stores = self.stores.lock().unwrap();
        let store = stores.entry(namespace(database, collection)).or_default();

        let before = store.len();
        store.retain(|place| place.id != place_id);

        if store.len() == before {
            return Err(AppError::NotFound("장소를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn search_place(
        &self,
        database: &str,
        collection: &str,
        term: &str,
        filter: Filter,
    ) -> Result<Vec<Place>, AppError> {
        if filter.limit <= 0 {
            return Ok(Vec::new());
        }

        let words: Vec<String> = term
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect();

        let stores = self.stores.lock().unwrap();
        let store = stores
            .get(&namespace(database, collection))
            .cloned()
            .unwrap_or_default();

        // 단어 출현 횟수 합을 관련도 점수로 사용
        let mut scored: Vec<(usize, Place)> = store
            .into_iter()
            .filter_map(|place| {
                let text = format!("{} {}", place.title, place.description).to_lowercase();
                let score: usize = words.iter().map(|word| occurrences(&text, word)).sum();
                if score > 0 { Some((score, place)) } else { None }
            })
            .collect();

        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(scored
            .into_iter()
            .map(|(_, place)| place)
            .skip(filter.skip as usize)
            .take(filter.limit as usize)
            .collect())
    }
}

/// 인메모리 리뷰 저장소
#[derive(Default)]
pub struct MemoryReviewRepository {
    stores: Mutex<HashMap<Namespace, Vec<Review>>>,
}

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn insert_one(
        &self,
        database: &str,
        collection: &str,
        review: &Review,
    ) -> Result<String, AppError> {
        let mut stores = self.stores.lock().unwrap();
        let store = stores.entry(namespace(database, collection)).or_default();

        if store.iter().any(|existing| existing.id == review.id) {
            return Err(AppError::Persistence(format!(
                "중복된 _id: {}",
                review.id
            )));
        }

        store.push(review.clone());
        Ok(review.id.clone())
    }

    async fn find_one(
        &self,
        database: &str,
        collection: &str,
        review_id: &str,
    ) -> Result<Review, AppError> {
        let stores = self.stores.lock().unwrap();

        stores
            .get(&namespace(database, collection))
            .and_then(|store| store.iter().find(|review| review.id == review_id))
            .cloned()
            .ok_or_else(|| AppError::NotFound("리뷰를 찾을 수 없습니다".to_string()))
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

        let stores = self.stores.lock().unwrap();
        let mut reviews: Vec<Review> = stores
            .get(&namespace(database, collection))
            .map(|store| {
                store
                    .iter()
                    .filter(|review| review.place_id == place_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        reviews.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(reviews
            .into_iter()
            .skip(filter.skip as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn update_one(
        &self,
        database: &str,
        collection: &str,
        review: &Review,
    ) -> Result<(), AppError> {
        let mut stores = self.stores.lock().unwrap();
        let store = stores.entry(namespace(database, collection)).or_default();

        match store.iter_mut().find(|stored| stored.id == review.id) {
            Some(stored) => {
                *stored = review.clone();
                Ok(())
            }
            None => Err(AppError::NotFound("리뷰를 찾을 수 없습니다".to_string())),
        }
    }

    async fn delete_one(
        &self,
        database: &str,
        collection: &str,
        review_id: &str,
    ) -> Result<(), AppError> {
        let mut stores = self.stores.lock().unwrap();
        let store = stores.entry(namespace(database, collection)).or_default();

        let before = store.len();
        store.retain(|review| review.id != review_id);

        if store.len() == before {
            return Err(AppError::NotFound("리뷰를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    const DB: &str = "trouver";
    const PLACES: &str = "places";
    const REVIEWS: &str = "reviews";

    fn place(id: &str, title: &str, description: &str, millis: i64) -> Place {
        Place {
            id: id.to_string(),
            user_id: "u1".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            categories: vec!["food".to_string()],
            image_url: Some("https://img.example.com/cafe.jpg".to_string()),
            phone_number: None,
            email: None,
            location: None,
            created_at: DateTime::from_millis(millis),
        }
    }

    fn review(id: &str, place_id: &str, millis: i64) -> Review {
        Review {
            id: id.to_string(),
            place_id: place_id.to_string(),
            user_id: "u1".to_string(),
            content: "분위기가 좋아요".to_string(),
            rating: 4.0,
            created_at: DateTime::from_millis(millis),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_round_trip() {
        let repo = MemoryPlaceRepository::new();
        let stored = place("p1", "Cafe X", "Coffee", 1_000);

        let id = repo.insert_one(DB, PLACES, &stored).await.unwrap();
        assert_eq!(id, "p1");

        let found = repo.find_one(DB, PLACES, "p1").await.unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_find_missing_id_is_not_found() {
        let repo = MemoryPlaceRepository::new();

        let err = repo.find_one(DB, PLACES, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = MemoryPlaceRepository::new();
        repo.insert_one(DB, PLACES, &place("p1", "Cafe X", "Coffee", 1_000))
            .await
            .unwrap();

        let err = repo
            .insert_one(DB, PLACES, &place("p1", "Cafe Y", "Tea", 2_000))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_namespaces_are_isolated() {
        let repo = MemoryPlaceRepository::new();
        repo.insert_one(DB, PLACES, &place("p1", "Cafe X", "Coffee", 1_000))
            .await
            .unwrap();

        let err = repo.find_one("staging", PLACES, "p1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let staged = repo
            .list("staging", PLACES, Filter::from_page(1, 10))
            .await
            .unwrap();
        assert!(staged.is_empty());
    }

    #[tokio::test]
    async fn test_list_limit_zero_returns_empty() {
        let repo = MemoryPlaceRepository::new();
        repo.insert_one(DB, PLACES, &place("p1", "Cafe X", "Coffee", 1_000))
            .await
            .unwrap();

        let places = repo
            .list(DB, PLACES, Filter { skip: 0, limit: 0 })
            .await
            .unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_list_skip_beyond_size_returns_empty() {
        let repo = MemoryPlaceRepository::new();
        repo.insert_one(DB, PLACES, &place("p1", "Cafe X", "Coffee", 1_000))
            .await
            .unwrap();

        let places = repo
            .list(DB, PLACES, Filter { skip: 100, limit: 10 })
            .await
            .unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_by_created_at_then_id() {
        let repo = MemoryPlaceRepository::new();
        // 삽입 순서와 생성 시각 순서를 다르게 구성
        repo.insert_one(DB, PLACES, &place("p3", "셋째", "c", 3_000))
            .await
            .unwrap();
        repo.insert_one(DB, PLACES, &place("p1", "첫째", "a", 1_000))
            .await
            .unwrap();
        repo.insert_one(DB, PLACES, &place("p2", "둘째", "b", 1_000))
            .await
            .unwrap();

        let places = repo.list(DB, PLACES, Filter::from_page(1, 10)).await.unwrap();
        let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_pagination_second_page_returns_docs_11_to_20() {
        let repo = MemoryPlaceRepository::new();
        for i in 1..=25 {
            let id = format!("place-{:02}", i);
            repo.insert_one(DB, PLACES, &place(&id, "Cafe", "Coffee", 1_000 * i))
                .await
                .unwrap();
        }

        let page = repo
            .list(DB, PLACES, Filter::from_page(2, 10))
            .await
            .unwrap();

        assert_eq!(page.len(), 10);
        assert_eq!(page.first().unwrap().id, "place-11");
        assert_eq!(page.last().unwrap().id, "place-20");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = MemoryPlaceRepository::new();

        let err = repo
            .update_one(DB, PLACES, &place("ghost", "없음", "없음", 1_000))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found_and_stays_missing() {
        let repo = MemoryPlaceRepository::new();

        let err = repo.delete_one(DB, PLACES, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = repo.find_one(DB, PLACES, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_document() {
        let repo = MemoryPlaceRepository::new();
        repo.insert_one(DB, PLACES, &place("p1", "Cafe X", "Coffee", 1_000))
            .await
            .unwrap();
        repo.insert_one(DB, PLACES, &place("p2", "Cafe Y", "Tea", 2_000))
            .await
            .unwrap();

        repo.delete_one(DB, PLACES, "p1").await.unwrap();

        assert!(matches!(
            repo.find_one(DB, PLACES, "p1").await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(repo.find_one(DB, PLACES, "p2").await.is_ok());
    }

    #[tokio::test]
    async fn test_search_ranks_by_term_occurrences() {
        let repo = MemoryPlaceRepository::new();
        repo.insert_one(DB, PLACES, &place("p1", "Coffee corner", "Coffee and coffee", 1_000))
            .await
            .unwrap();
        repo.insert_one(DB, PLACES, &place("p2", "Tea house", "No match here", 2_000))
            .await
            .unwrap();
        repo.insert_one(DB, PLACES, &place("p3", "Coffee stand", "Snacks", 3_000))
            .await
            .unwrap();

        let hits = repo
            .search_place(DB, PLACES, "coffee", Filter::from_page(1, 10))
            .await
            .unwrap();
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[tokio::test]
    async fn test_search_no_match_returns_empty() {
        let repo = MemoryPlaceRepository::new();
        repo.insert_one(DB, PLACES, &place("p1", "Cafe X", "Coffee", 1_000))
            .await
            .unwrap();

        let hits = repo
            .search_place(DB, PLACES, "피자", Filter::from_page(1, 10))
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_review_list_is_scoped_to_place() {
        let repo = MemoryReviewRepository::new();
        repo.insert_one(DB, REVIEWS, &review("r1", "p1", 1_000))
            .await
            .unwrap();
        repo.insert_one(DB, REVIEWS, &review("r2", "p2", 2_000))
            .await
            .unwrap();
        repo.insert_one(DB, REVIEWS, &review("r3", "p1", 3_000))
            .await
            .unwrap();

        let reviews = repo
            .list(DB, REVIEWS, "p1", Filter::from_page(1, 10))
            .await
            .unwrap();
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[tokio::test]
    async fn test_review_round_trip_and_delete() {
        let repo = MemoryReviewRepository::new();
        let stored = review("r1", "p1", 1_000);

        repo.insert_one(DB, REVIEWS, &stored).await.unwrap();
        assert_eq!(repo.find_one(DB, REVIEWS, "r1").await.unwrap(), stored);

        repo.delete_one(DB, REVIEWS, "r1").await.unwrap();
        assert!(matches!(
            repo.find_one(DB, REVIEWS, "r1").await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
