// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod blog;

use crate::config::settings::Settings;
use crate::domain::services::search_service::SearchService;
use crate::infrastructure::repositories::blog_repo_impl::BlogRepositoryImpl;
use crate::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use crate::infrastructure::search::DatabaseSearchIndex;
use crate::presentation::handlers::search_handler;
use crate::presentation::middleware::auth_middleware::AuthState;
use axum::{routing::get, Extension, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `auth_state` - 认证中间件使用的状态
///
/// # 返回值
///
/// 返回配置好的路由（尚未注入依赖）
pub fn routes(auth_state: AuthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/v1/search", get(search_handler::search))
        .merge(blog::blog_routes(auth_state))
}

/// 组装完整的应用
///
/// 创建仓库、搜索索引和搜索服务，并作为扩展注入到所有路由
pub fn app(db: Arc<DatabaseConnection>, settings: Arc<Settings>) -> Router {
    let blog_repo = Arc::new(BlogRepositoryImpl::new(db.clone()));
    let comment_repo = Arc::new(CommentRepositoryImpl::new(db.clone()));

    let search_service = Arc::new(SearchService::from_settings(
        Arc::new(DatabaseSearchIndex::title(db.clone())),
        Arc::new(DatabaseSearchIndex::content(db.clone())),
        &settings.search,
    ));

    let auth_state = AuthState { db };

    routes(auth_state)
        .layer(Extension(blog_repo))
        .layer(Extension(comment_repo))
        .layer(Extension(search_service))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
