//! 리뷰 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`ReviewRepository`](review_repo::ReviewRepository) 트레이트가 리뷰 저장소의
//! 계약을 정의하고, [`MongoReviewRepository`](review_repo::MongoReviewRepository)가
//! MongoDB 기반 구현을 제공합니다. 목록 조회는 항상 대상 장소 기준입니다.

pub mod review_repo;

pub use review_repo::{MongoReviewRepository, ReviewRepository};
