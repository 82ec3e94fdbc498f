// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::AuthenticatedUser;
use crate::infrastructure::database::entities::session;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 数据库连接
    pub db: Arc<DatabaseConnection>,
}

/// 从 `Authorization` 头中取出 Bearer 令牌
fn bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// 认证中间件
///
/// 按 Bearer 令牌查找会话，成功后把 [`AuthenticatedUser`] 注入请求扩展
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功后的下游响应
/// * `Err(StatusCode::UNAUTHORIZED)` - 缺少令牌、令牌未知或会话已过期
/// * `Err(StatusCode::INTERNAL_SERVER_ERROR)` - 查询会话失败
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    debug!("AuthMiddleware processing path: {}", req.uri().path());

    let token = bearer_token(&req)
        .ok_or(StatusCode::UNAUTHORIZED)?
        .to_string();

    let session = match session::Entity::find()
        .filter(session::Column::Token.eq(token))
        .one(state.db.as_ref())
        .await
    {
        Ok(Some(session)) => session,
        Ok(None) => {
            warn!("Rejected request with unknown session token");
            return Err(StatusCode::UNAUTHORIZED);
        }
        Err(e) => {
            error!("Database error checking session: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    if let Some(expires_at) = session.expires_at {
        if expires_at.with_timezone(&Utc) <= Utc::now() {
            warn!("Rejected expired session for user {}", session.user_id);
            return Err(StatusCode::UNAUTHORIZED);
        }
    }

    req.extensions_mut().insert(AuthenticatedUser {
        id: session.user_id,
        name: session.user_name,
    });
    Ok(next.run(req).await)
}
