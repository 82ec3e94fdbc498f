// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::blog::Blog;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 博客文章仓库特质
///
/// 定义文章数据访问接口。该特质遵循依赖倒置原则，
/// 确保领域层不依赖于具体的数据存储实现。
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// 创建文章
    ///
    /// # 参数
    ///
    /// * `blog` - 要创建的文章实体
    ///
    /// # 返回值
    ///
    /// * `Ok(Blog)` - 成功创建后返回文章
    /// * `Err(RepositoryError)` - 创建失败时返回错误
    async fn create(&self, blog: &Blog) -> Result<Blog, RepositoryError>;

    /// 根据ID查找文章
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Blog))` - 找到文章
    /// * `Ok(None)` - 文章不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepositoryError>;

    /// 按创建时间倒序列出所有文章
    async fn list_newest_first(&self) -> Result<Vec<Blog>, RepositoryError>;

    /// 检查文章是否存在
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
