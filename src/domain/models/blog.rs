// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 博客文章实体
///
/// 表示一篇已发布的博客文章。文章的唯一标识符同时也是
/// 搜索结果去重时使用的身份键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    /// 文章唯一标识符
    pub id: Uuid,
    /// 文章标题
    pub title: String,
    /// 文章正文
    pub content: String,
    /// 作者的用户ID
    pub author_id: Uuid,
    /// 封面图片在外部存储中的键（可选）
    pub image_storage_id: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// 创建一篇新文章
    ///
    /// # 参数
    ///
    /// * `title` - 文章标题
    /// * `content` - 文章正文
    /// * `author_id` - 作者ID
    /// * `image_storage_id` - 封面图片存储键
    ///
    /// # 返回值
    ///
    /// 返回带有新生成ID和当前时间戳的文章
    pub fn new(
        title: String,
        content: String,
        author_id: Uuid,
        image_storage_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author_id,
            image_storage_id,
            created_at: Utc::now(),
        }
    }
}
