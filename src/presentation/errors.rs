// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::repositories::blog_repository::RepositoryError;
use crate::domain::search::index::SearchError;
use crate::domain::services::blog_service::BlogServiceError;
use crate::domain::services::comment_service::CommentServiceError;

/// 应用错误类型
///
/// 封装处理器中可能出现的所有错误，按具体错误类型映射到HTTP状态码
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的HTTP状态码
    pub fn status_code(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<SearchError>() {
            return match err {
                SearchError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                SearchError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            };
        }
        if let Some(err) = self.0.downcast_ref::<BlogServiceError>() {
            return match err {
                BlogServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
                BlogServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                BlogServiceError::Repository(e) => repository_status(e),
            };
        }
        if let Some(err) = self.0.downcast_ref::<CommentServiceError>() {
            return match err {
                CommentServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
                CommentServiceError::BlogNotFound(_) => StatusCode::NOT_FOUND,
                CommentServiceError::Repository(e) => repository_status(e),
            };
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(err);
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed with {}: {}", status, error_message);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
