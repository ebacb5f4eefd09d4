use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use std::io;

use bookmarks_server::{
    api::build_app,
    app_state::AppState,
    config::{Config, DatabaseSettings},
    database,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid configuration: {}", e),
        )
    })?;
    let db_settings = DatabaseSettings::from_env()
        .map_err(|_| io::Error::new(io::ErrorKind::NotFound, "DATABASE_URL must be set"))?;

    let db = database::connect_with_settings(&db_settings).await?;
    database::ensure_schema(&db)
        .await
        .map_err(|e| io::Error::other(format!("Failed to prepare schema: {}", e)))?;

    let host = config.host.clone();
    let port = config.port;
    let workers = config.effective_workers();

    log::info!("Starting server at http://{}:{} with {} workers", host, port, workers);
    if config.swagger_ui_enabled() {
        log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);
    }

    let state = web::Data::new(AppState::new(db, config));

    HttpServer::new(move || build_app(state.clone()))
        .workers(workers)
        .bind((host, port))?
        .run()
        .await
}
