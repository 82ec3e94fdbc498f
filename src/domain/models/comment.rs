// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::AuthenticatedUser;

/// 评论实体
///
/// 评论保存作者名称的快照，作者改名不会影响历史评论。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// 评论唯一标识符
    pub id: Uuid,
    /// 所属文章ID
    pub blog_id: Uuid,
    /// 评论内容
    pub body: String,
    /// 作者的用户ID
    pub author_id: Uuid,
    /// 作者显示名称
    pub author_name: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// 由当前用户在指定文章下创建一条新评论
    pub fn new(blog_id: Uuid, body: String, author: &AuthenticatedUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            blog_id,
            body,
            author_id: author.id,
            author_name: author.name.clone(),
            created_at: Utc::now(),
        }
    }
}
