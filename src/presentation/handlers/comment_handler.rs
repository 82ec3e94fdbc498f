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
    application::dto::comment_request::CreateCommentRequestDto,
    domain::{
        models::user::AuthenticatedUser,
        repositories::{blog_repository::BlogRepository, comment_repository::CommentRepository},
        services::comment_service::CommentService,
    },
    presentation::errors::AppError,
};

/// 在文章下发表评论
///
/// 文章不存在时返回 404
pub async fn create_comment<BR, CR>(
    Extension(blog_repo): Extension<Arc<BR>>,
    Extension(comment_repo): Extension<Arc<CR>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(blog_id): Path<Uuid>,
    Json(payload): Json<CreateCommentRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    BR: BlogRepository + 'static,
    CR: CommentRepository + 'static,
{
    let service = CommentService::new(blog_repo, comment_repo);
    let comment = service.create_comment(&user, blog_id, payload).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// 列出文章的评论
pub async fn list_comments<BR, CR>(
    Extension(blog_repo): Extension<Arc<BR>>,
    Extension(comment_repo): Extension<Arc<CR>>,
    Path(blog_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    BR: BlogRepository + 'static,
    CR: CommentRepository + 'static,
{
    let service = CommentService::new(blog_repo, comment_repo);
    Ok(Json(service.list_comments(blog_id).await?))
}
