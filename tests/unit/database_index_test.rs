// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::memory_db;
use blogrs::domain::models::blog::Blog;
use blogrs::domain::repositories::blog_repository::BlogRepository;
use blogrs::domain::search::index::SearchIndex;
use blogrs::infrastructure::repositories::blog_repo_impl::BlogRepositoryImpl;
use blogrs::infrastructure::search::DatabaseSearchIndex;
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

/// 按给定顺序插入文章，越靠后越新
async fn insert_blogs(db: &Arc<DatabaseConnection>, posts: &[(&str, &str)]) -> Vec<Blog> {
    let repo = BlogRepositoryImpl::new(db.clone());
    let base = Utc::now() - Duration::hours(1);
    let mut blogs = Vec::new();

    for (i, (title, content)) in posts.iter().enumerate() {
        let mut blog = Blog::new(title.to_string(), content.to_string(), Uuid::new_v4(), None);
        blog.created_at = base + Duration::minutes(i as i64);
        blogs.push(repo.create(&blog).await.unwrap());
    }
    blogs
}

fn ids(blogs: &[Blog]) -> Vec<Uuid> {
    blogs.iter().map(|b| b.id).collect()
}

#[tokio::test]
async fn title_index_is_case_insensitive_and_newest_first() {
    let db = memory_db().await;
    let blogs = insert_blogs(
        &db,
        &[
            ("Intro to Rust", "Some words."),
            ("Python tips", "Mentions rust once."),
            ("rustacean diaries", "More words."),
        ],
    )
    .await;

    let index = DatabaseSearchIndex::title(db.clone());
    let found = index.query("RUST", 10).await.unwrap();

    assert_eq!(ids(&found), vec![blogs[2].id, blogs[0].id]);
    assert_eq!(index.name(), "title");
}

#[tokio::test]
async fn content_index_matches_body_only() {
    let db = memory_db().await;
    let blogs = insert_blogs(
        &db,
        &[
            ("Rust title", "Nothing relevant in here."),
            ("Python tips", "Mentions Rust once."),
        ],
    )
    .await;

    let index = DatabaseSearchIndex::content(db.clone());
    let found = index.query("rust", 10).await.unwrap();

    assert_eq!(ids(&found), vec![blogs[1].id]);
    assert_eq!(index.name(), "content");
}

#[tokio::test]
async fn index_respects_limit() {
    let db = memory_db().await;
    let blogs = insert_blogs(
        &db,
        &[
            ("note one", "a"),
            ("note two", "b"),
            ("note three", "c"),
        ],
    )
    .await;

    let found = DatabaseSearchIndex::title(db.clone())
        .query("note", 2)
        .await
        .unwrap();

    assert_eq!(ids(&found), vec![blogs[2].id, blogs[1].id]);
}

#[tokio::test]
async fn underscore_is_not_a_wildcard() {
    let db = memory_db().await;
    let blogs = insert_blogs(&db, &[("snake_case names", "x"), ("snakeXcase names", "y")]).await;

    let found = DatabaseSearchIndex::title(db.clone())
        .query("snake_case", 10)
        .await
        .unwrap();

    assert_eq!(ids(&found), vec![blogs[0].id]);
}

#[tokio::test]
async fn non_ascii_title_matches_in_its_own_case() {
    let db = memory_db().await;
    let blogs = insert_blogs(&db, &[("École de Rust", "x"), ("Ecole primaire", "y")]).await;
    let index = DatabaseSearchIndex::title(db.clone());

    for term in ["École", "ÉCOLE", "École DE rust"] {
        let found = index.query(term, 10).await.unwrap();
        assert_eq!(ids(&found), vec![blogs[0].id], "term {:?}", term);
    }
}
