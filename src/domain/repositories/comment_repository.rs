// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::blog_repository::RepositoryError;
use crate::domain::models::comment::Comment;
use async_trait::async_trait;
use uuid::Uuid;

/// 评论仓库特质
///
/// 定义评论数据访问接口
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 创建评论
    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError>;
    /// 按创建时间倒序列出指定文章的评论
    async fn find_by_blog_id(&self, blog_id: Uuid) -> Result<Vec<Comment>, RepositoryError>;
}
