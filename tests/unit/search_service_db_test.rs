// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::memory_db;
use blogrs::domain::models::blog::Blog;
use blogrs::domain::repositories::blog_repository::BlogRepository;
use blogrs::domain::search::index::SearchError;
use blogrs::domain::services::search_service::SearchService;
use blogrs::infrastructure::repositories::blog_repo_impl::BlogRepositoryImpl;
use blogrs::infrastructure::search::DatabaseSearchIndex;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

fn service(db: &Arc<DatabaseConnection>) -> SearchService {
    SearchService::new(
        Arc::new(DatabaseSearchIndex::title(db.clone())),
        Arc::new(DatabaseSearchIndex::content(db.clone())),
        2000,
    )
    .with_max_limit(50)
}

#[tokio::test]
async fn blog_matching_both_indexes_appears_once() {
    let db = memory_db().await;
    let repo = BlogRepositoryImpl::new(db.clone());
    let blog = Blog::new(
        "Async Rust".to_string(),
        "Rust futures are lazy.".to_string(),
        Uuid::new_v4(),
        None,
    );
    repo.create(&blog).await.unwrap();

    let results = service(&db).search("rust", 5).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, blog.id);
}

#[tokio::test]
async fn results_are_unique_and_bounded() {
    let db = memory_db().await;
    let repo = BlogRepositoryImpl::new(db.clone());
    for i in 0..6 {
        let blog = Blog::new(
            format!("Tokio post {}", i),
            format!("Tokio runtime notes number {}.", i),
            Uuid::new_v4(),
            None,
        );
        repo.create(&blog).await.unwrap();
    }

    let results = service(&db).search("tokio", 4).await.unwrap();

    assert_eq!(results.len(), 4);
    let unique: HashSet<Uuid> = results.iter().map(|r| r.id).collect();
    assert_eq!(unique.len(), 4);
}

#[tokio::test]
async fn non_positive_limit_is_invalid() {
    let db = memory_db().await;

    let err = service(&db).search("tokio", 0).await.unwrap_err();

    assert!(matches!(err, SearchError::InvalidArgument(_)));
}
