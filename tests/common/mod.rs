#![allow(dead_code)]

use actix_web::{http::header, web};
use bookmarks_server::{
    app_state::AppState,
    config::Config,
    database::{self, DB},
};
use sea_orm::{ConnectOptions, Database};

pub const API_TOKEN: &str = "test-api-token";

/// Fresh in-memory SQLite database with the bookmarks table created.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn test_db() -> DB {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite");
    database::ensure_schema(&db)
        .await
        .expect("failed to create bookmarks table");
    db
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 8000,
        api_token: API_TOKEN.to_string(),
        max_body_bytes: None,
        workers: Some(1),
        swagger_ui: Some(false),
        cors_allowed_origin: None,
    }
}

pub async fn test_state_with(config: Config) -> web::Data<AppState> {
    web::Data::new(AppState::new(test_db().await, config))
}

pub async fn test_state() -> web::Data<AppState> {
    test_state_with(test_config()).await
}

pub fn bearer() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", API_TOKEN))
}
