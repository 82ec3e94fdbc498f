// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::dto::blog_request::CreateBlogRequestDto,
    domain::{
        models::user::AuthenticatedUser, repositories::blog_repository::BlogRepository,
        services::blog_service::BlogService,
    },
    presentation::errors::AppError,
};

/// 发布新文章
pub async fn create_blog<BR>(
    Extension(blog_repo): Extension<Arc<BR>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(payload): Json<CreateBlogRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    BR: BlogRepository + 'static,
{
    let service = BlogService::new(blog_repo);
    let blog = service.create_blog(&user, payload).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// 按创建时间倒序列出文章
pub async fn list_blogs<BR>(
    Extension(blog_repo): Extension<Arc<BR>>,
) -> Result<impl IntoResponse, AppError>
where
    BR: BlogRepository + 'static,
{
    let service = BlogService::new(blog_repo);
    Ok(Json(service.list_blogs().await?))
}

/// 获取文章详情
pub async fn get_blog<BR>(
    Extension(blog_repo): Extension<Arc<BR>>,
    Path(blog_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    BR: BlogRepository + 'static,
{
    let service = BlogService::new(blog_repo);
    Ok(Json(service.get_blog(blog_id).await?))
}
