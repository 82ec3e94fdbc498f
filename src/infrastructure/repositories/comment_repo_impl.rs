// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::Comment;
use crate::domain::repositories::blog_repository::RepositoryError;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::infrastructure::database::entities::comment as comment_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 评论仓库实现
pub struct CommentRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<comment_entity::Model> for Comment {
    fn from(m: comment_entity::Model) -> Self {
        Self {
            id: m.id,
            blog_id: m.blog_id,
            body: m.body,
            author_id: m.author_id,
            author_name: m.author_name,
            created_at: m.created_at.into(),
        }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError> {
        let model = comment_entity::ActiveModel {
            id: Set(comment.id),
            blog_id: Set(comment.blog_id),
            body: Set(comment.body.clone()),
            author_id: Set(comment.author_id),
            author_name: Set(comment.author_name.clone()),
            created_at: Set(comment.created_at.into()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(comment.clone())
    }

    async fn find_by_blog_id(&self, blog_id: Uuid) -> Result<Vec<Comment>, RepositoryError> {
        let models = comment_entity::Entity::find()
            .filter(comment_entity::Column::BlogId.eq(blog_id))
            .order_by_desc(comment_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Comment::from).collect())
    }
}
