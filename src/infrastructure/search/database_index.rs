// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::domain::models::blog::Blog;
use crate::domain::search::index::{IndexError, SearchIndex};
use crate::infrastructure::database::entities::blog as blog_entity;

const LIKE_ESCAPE: char = '!';

/// 被索引的文章字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexedField {
    Title,
    Content,
}

impl IndexedField {
    fn column(self) -> blog_entity::Column {
        match self {
            Self::Title => blog_entity::Column::Title,
            Self::Content => blog_entity::Column::Content,
        }
    }

    fn index_name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

/// 基于数据库的单字段搜索索引
///
/// 对字段做不区分大小写的子串匹配，按创建时间倒序排名
pub struct DatabaseSearchIndex {
    db: Arc<DatabaseConnection>,
    field: IndexedField,
}

impl DatabaseSearchIndex {
    pub fn new(db: Arc<DatabaseConnection>, field: IndexedField) -> Self {
        Self { db, field }
    }

    /// 标题索引
    pub fn title(db: Arc<DatabaseConnection>) -> Self {
        Self::new(db, IndexedField::Title)
    }

    /// 正文索引
    pub fn content(db: Arc<DatabaseConnection>) -> Self {
        Self::new(db, IndexedField::Content)
    }
}

/// 转义 LIKE 通配符，使搜索词按字面匹配
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 按后端 `lower()` 的规则折叠搜索词的大小写
///
/// SQLite 的 `lower()` 只处理 ASCII 字母，搜索词必须以同样方式折叠
pub fn fold_case(backend: DbBackend, term: &str) -> String {
    match backend {
        DbBackend::Sqlite => term.to_ascii_lowercase(),
        _ => term.to_lowercase(),
    }
}

#[async_trait]
impl SearchIndex for DatabaseSearchIndex {
    async fn query(&self, term: &str, limit: usize) -> Result<Vec<Blog>, IndexError> {
        let folded = fold_case(self.db.get_database_backend(), term);
        let pattern = format!("%{}%", escape_like(&folded));
        let matches = Expr::expr(Func::lower(Expr::col(self.field.column())))
            .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE));

        let models = blog_entity::Entity::find()
            .filter(matches)
            .order_by_desc(blog_entity::Column::CreatedAt)
            .order_by_asc(blog_entity::Column::Id)
            .limit(limit as u64)
            .all(self.db.as_ref())
            .await
            .map_err(|e| IndexError::Backend(e.to_string()))?;

        Ok(models.into_iter().map(Blog::from).collect())
    }

    fn name(&self) -> &'static str {
        self.field.index_name()
    }
}
