// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use blogrs::config::settings::{DatabaseSettings, Settings};
use blogrs::domain::models::user::AuthenticatedUser;
use blogrs::infrastructure::database::connection;
use blogrs::infrastructure::database::entities::session;
use blogrs::presentation::routes;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub token: String,
    pub user: AuthenticatedUser,
}

/// 内存 SQLite 数据库，已应用全部迁移
pub async fn memory_db() -> Arc<DatabaseConnection> {
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: Some(5),
        idle_timeout: None,
    };

    Arc::new(
        connection::connect_and_migrate(&db_settings)
            .await
            .expect("Failed to prepare in-memory database"),
    )
}

/// 插入一个会话并返回其令牌
pub async fn seed_session(
    db: &DatabaseConnection,
    user: &AuthenticatedUser,
    expires_in: Option<Duration>,
) -> String {
    let token = format!("test-token-{}", Uuid::new_v4());
    let now = Utc::now();

    session::ActiveModel {
        id: Set(Uuid::new_v4()),
        token: Set(token.clone()),
        user_id: Set(user.id),
        user_name: Set(user.name.clone()),
        expires_at: Set(expires_in.map(|d| (now + d).into())),
        created_at: Set(now.into()),
    }
    .insert(db)
    .await
    .expect("Failed to seed session");

    token
}

pub async fn create_test_app() -> TestApp {
    let db = memory_db().await;

    let mut settings = Settings::new().expect("Failed to load settings");
    settings.database.url = "sqlite::memory:".to_string();
    settings.metrics.enabled = false;

    let user = AuthenticatedUser {
        id: Uuid::new_v4(),
        name: "Ada".to_string(),
    };
    let token = seed_session(&db, &user, Some(Duration::hours(1))).await;

    let app = routes::app(db.clone(), Arc::new(settings));
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        db,
        token,
        user,
    }
}

impl TestApp {
    /// 以已登录用户身份发布文章，返回响应 JSON
    pub async fn publish(&self, title: &str, content: &str) -> Value {
        let response = self
            .server
            .post("/v1/blogs")
            .authorization_bearer(&self.token)
            .json(&json!({ "title": title, "content": content }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()
    }
}
