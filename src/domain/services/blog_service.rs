// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::blog_request::CreateBlogRequestDto;
use crate::domain::models::blog::Blog;
use crate::domain::models::user::AuthenticatedUser;
use crate::domain::repositories::blog_repository::{BlogRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Error, Debug)]
pub enum BlogServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Blog not found: {0}")]
    NotFound(Uuid),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 博客文章服务
///
/// 负责文章的创建、列表与详情查询
pub struct BlogService<BR> {
    blog_repo: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogRepository + 'static,
{
    pub fn new(blog_repo: Arc<BR>) -> Self {
        Self { blog_repo }
    }

    /// 以当前用户身份发布文章
    pub async fn create_blog(
        &self,
        author: &AuthenticatedUser,
        dto: CreateBlogRequestDto,
    ) -> Result<Blog, BlogServiceError> {
        dto.validate()
            .map_err(|e| BlogServiceError::ValidationError(e.to_string()))?;

        let blog = Blog::new(dto.title, dto.content, author.id, dto.image_storage_id);
        let blog = self.blog_repo.create(&blog).await?;
        info!("Blog {} created by {}", blog.id, author.id);

        Ok(blog)
    }

    /// 按创建时间倒序列出所有文章
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, BlogServiceError> {
        Ok(self.blog_repo.list_newest_first().await?)
    }

    pub async fn get_blog(&self, id: Uuid) -> Result<Blog, BlogServiceError> {
        self.blog_repo
            .find_by_id(id)
            .await?
            .ok_or(BlogServiceError::NotFound(id))
    }
}
