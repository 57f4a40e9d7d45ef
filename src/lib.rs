//! 장소 리뷰 서비스 백엔드
//!
//! Rust 기반의 장소(places)와 리뷰(reviews) 관리 서비스입니다.
//! MongoDB 문서 저장소 위에서 소유권 기반 접근 제어, 부분 수정 병합,
//! 전문 검색을 제공합니다.
//!
//! # Features
//!
//! - **장소 관리**: 등록, 조회, 페이징 목록, 부분 수정, 삭제
//! - **전문 검색**: 제목/설명 텍스트 인덱스 기반 관련도 정렬 검색
//! - **리뷰 관리**: 장소에 종속된 리뷰 작성/목록, 평면 경로 수정/삭제
//! - **소유권 제어**: 소유자 본인 또는 관리자만 변경 가능
//! - **명시적 DI**: 트레이트 객체 주입으로 저장소 교체 가능
//! - **MongoDB**: 장소/리뷰 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/v1/api)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 주체 추출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 소유권 판정, 병합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스, 데드라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 문서 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use place_service_backend::config::Config;
//! use place_service_backend::db::Database;
//! use place_service_backend::repositories::places::place_repo::MongoPlaceRepository;
//! use place_service_backend::services::places::PlaceService;
//!
//! // 설정 로드 후 저장소와 서비스를 명시적으로 조립
//! let config = Config::from_env();
//! let database = Database::connect(&config.store).await?;
//! let place_repo = MongoPlaceRepository::new(database, config.store.op_timeout);
//! let place_service = PlaceService::new(Arc::new(place_repo), &config.store);
//!
//! let places = place_service.list_places(&query).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod policy;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
