// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::blog::Blog;
use async_trait::async_trait;
use thiserror::Error;

/// 单个索引查询的错误
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndexError {
    #[error("Index backend error: {0}")]
    Backend(String),
    #[error("Timeout")]
    Timeout,
}

/// 搜索操作对调用方暴露的错误
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// 参数非法，例如 limit 不是正数
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// 某个索引在重试预算内未能完成查询
    #[error("Search index '{index}' unavailable: {reason}")]
    Unavailable { index: &'static str, reason: String },
}

#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Return up to `limit` blogs matching `term`, in the index's own rank order
    async fn query(&self, term: &str, limit: usize) -> Result<Vec<Blog>, IndexError>;

    /// Get the name of the index
    fn name(&self) -> &'static str;
}
