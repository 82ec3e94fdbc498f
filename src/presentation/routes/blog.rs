// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::infrastructure::repositories::blog_repo_impl::BlogRepositoryImpl;
use crate::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use crate::presentation::handlers::{blog_handler, comment_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};

/// 创建文章与评论路由
///
/// 读取接口公开，`POST` 需要登录会话
///
/// # 参数
///
/// * `auth_state` - 认证中间件使用的状态
///
/// # 返回值
///
/// 返回配置好的文章路由
pub fn blog_routes(auth_state: AuthState) -> Router {
    let require_session = from_fn_with_state(auth_state, auth_middleware);

    Router::new()
        .route(
            "/v1/blogs",
            get(blog_handler::list_blogs::<BlogRepositoryImpl>).merge(
                post(blog_handler::create_blog::<BlogRepositoryImpl>)
                    .route_layer(require_session.clone()),
            ),
        )
        .route(
            "/v1/blogs/{id}",
            get(blog_handler::get_blog::<BlogRepositoryImpl>),
        )
        .route(
            "/v1/blogs/{id}/comments",
            get(comment_handler::list_comments::<BlogRepositoryImpl, CommentRepositoryImpl>)
                .merge(
                    post(
                        comment_handler::create_comment::<
                            BlogRepositoryImpl,
                            CommentRepositoryImpl,
                        >,
                    )
                    .route_layer(require_session),
                ),
        )
}
