// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::comment_request::CreateCommentRequestDto;
use crate::domain::models::comment::Comment;
use crate::domain::models::user::AuthenticatedUser;
use crate::domain::repositories::blog_repository::{BlogRepository, RepositoryError};
use crate::domain::repositories::comment_repository::CommentRepository;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Error, Debug)]
pub enum CommentServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Blog not found: {0}")]
    BlogNotFound(Uuid),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 评论服务
pub struct CommentService<BR, CR> {
    blog_repo: Arc<BR>,
    comment_repo: Arc<CR>,
}

impl<BR, CR> CommentService<BR, CR>
where
    BR: BlogRepository + 'static,
    CR: CommentRepository + 'static,
{
    pub fn new(blog_repo: Arc<BR>, comment_repo: Arc<CR>) -> Self {
        Self {
            blog_repo,
            comment_repo,
        }
    }

    /// 以当前用户身份在文章下发表评论
    pub async fn create_comment(
        &self,
        author: &AuthenticatedUser,
        blog_id: Uuid,
        dto: CreateCommentRequestDto,
    ) -> Result<Comment, CommentServiceError> {
        dto.validate()
            .map_err(|e| CommentServiceError::ValidationError(e.to_string()))?;
        self.ensure_blog_exists(blog_id).await?;

        let comment = Comment::new(blog_id, dto.body, author);
        let comment = self.comment_repo.create(&comment).await?;
        info!("Comment {} added to blog {}", comment.id, blog_id);

        Ok(comment)
    }

    /// 按创建时间倒序列出文章的评论
    pub async fn list_comments(&self, blog_id: Uuid) -> Result<Vec<Comment>, CommentServiceError> {
        self.ensure_blog_exists(blog_id).await?;
        Ok(self.comment_repo.find_by_blog_id(blog_id).await?)
    }

    async fn ensure_blog_exists(&self, blog_id: Uuid) -> Result<(), CommentServiceError> {
        if self.blog_repo.exists(blog_id).await? {
            Ok(())
        } else {
            Err(CommentServiceError::BlogNotFound(blog_id))
        }
    }
}
