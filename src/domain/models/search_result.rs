// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::blog::Blog;

/// 摘要保留的最大字符数
pub const EXCERPT_CHARS: usize = 60;

/// 搜索结果
///
/// 博客文章的只读投影，每次查询重新构建，返回后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
}

impl SearchResult {
    /// 生成正文摘要，按字符截断，超出部分以 `...` 结尾
    pub fn excerpt_of(content: &str) -> String {
        match content.char_indices().nth(EXCERPT_CHARS) {
            Some((byte_idx, _)) => format!("{}...", &content[..byte_idx]),
            None => content.to_string(),
        }
    }
}

impl From<Blog> for SearchResult {
    fn from(blog: Blog) -> Self {
        let excerpt = Self::excerpt_of(&blog.content);
        Self {
            id: blog.id,
            title: blog.title,
            content: blog.content,
            excerpt,
        }
    }
}
