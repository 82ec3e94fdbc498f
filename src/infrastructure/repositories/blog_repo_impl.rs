// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::blog::Blog;
use crate::domain::repositories::blog_repository::{BlogRepository, RepositoryError};
use crate::infrastructure::database::entities::blog as blog_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 文章仓库实现
pub struct BlogRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryImpl {
    /// 创建新的文章仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<blog_entity::Model> for Blog {
    fn from(m: blog_entity::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            content: m.content,
            author_id: m.author_id,
            image_storage_id: m.image_storage_id,
            created_at: m.created_at.into(),
        }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryImpl {
    async fn create(&self, blog: &Blog) -> Result<Blog, RepositoryError> {
        let model = blog_entity::ActiveModel {
            id: Set(blog.id),
            title: Set(blog.title.clone()),
            content: Set(blog.content.clone()),
            author_id: Set(blog.author_id),
            image_storage_id: Set(blog.image_storage_id.clone()),
            created_at: Set(blog.created_at.into()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(blog.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepositoryError> {
        let model = blog_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Blog::from))
    }

    async fn list_newest_first(&self) -> Result<Vec<Blog>, RepositoryError> {
        let models = blog_entity::Entity::find()
            .order_by_desc(blog_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Blog::from).collect())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let count = blog_entity::Entity::find_by_id(id)
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }
}
