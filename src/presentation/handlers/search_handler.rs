// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::dto::search_request::{SearchQueryDto, SearchResponseDto},
    config::settings::Settings,
    domain::{search::index::SearchError, services::search_service::SearchService},
    presentation::errors::AppError,
};

/// 处理搜索请求
///
/// # 参数
///
/// * `service` - 多索引搜索服务
/// * `settings` - 应用配置，提供默认结果数与最小搜索词长度
/// * `query` - 查询参数 `term` 与可选的 `limit`
///
/// # 返回值
///
/// 返回 `{term, results}`；参数非法时为 400，索引不可用时为 503
pub async fn search(
    Extension(service): Extension<Arc<SearchService>>,
    Extension(settings): Extension<Arc<Settings>>,
    Query(query): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    query
        .validate_term(settings.search.min_term_length)
        .map_err(SearchError::InvalidArgument)?;

    let limit = query.limit.unwrap_or(settings.search.default_limit);
    let term = query.term.trim().to_string();
    info!("Searching blogs for '{}' (limit {})", term, limit);

    let results = service.search(&term, limit).await?;
    Ok(Json(SearchResponseDto { term, results }))
}
