use actix_web::{delete, get, http::header::LOCATION, post, web, HttpRequest, HttpResponse};
use serde_json::{Map, Value};

use crate::{
    api::{
        sanitizer::sanitize_bookmark,
        unmatched_route,
        validation::{ensure_required_fields, validate_new_bookmark},
    },
    app_state::AppState,
    database::models::bookmarks,
    errors::AppError,
};

use super::{
    functions::{location_for, request_id},
    structures::{CreateBookmarkRequest, ErrorEnvelope, UnauthorizedEnvelope},
};

#[utoipa::path(
    get,
    path = "/bookmarks",
    tag = "Bookmarks",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All bookmarks in insertion order", body = [bookmarks::Model]),
        (status = 401, description = "Missing or invalid bearer token", body = UnauthorizedEnvelope),
    )
)]
#[get("")]
pub async fn list_bookmarks(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stored = app_state.repository.list().await?;
    let body: Vec<bookmarks::Model> = stored.into_iter().map(sanitize_bookmark).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "Bookmark id")
    ),
    responses(
        (status = 200, description = "Bookmark found", body = bookmarks::Model),
        (status = 401, description = "Missing or invalid bearer token", body = UnauthorizedEnvelope),
        (status = 404, description = "Bookmark not found", body = ErrorEnvelope),
    )
)]
#[get("/{id}")]
pub async fn get_bookmark(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let bookmark = app_state.repository.get_by_id(&id).await.inspect_err(|err| {
        if matches!(err, AppError::NotFound) {
            log::warn!("Bookmark with id {} not found", id);
        }
    })?;

    Ok(HttpResponse::Ok().json(sanitize_bookmark(bookmark)))
}

#[utoipa::path(
    post,
    path = "/bookmarks",
    tag = "Bookmarks",
    security(("bearer_token" = [])),
    request_body = CreateBookmarkRequest,
    responses(
        (status = 201, description = "Bookmark created", body = bookmarks::Model,
            headers(("location" = String, description = "Path of the new bookmark"))),
        (status = 400, description = "Missing field (plain text) or invalid field (JSON envelope)"),
        (status = 401, description = "Missing or invalid bearer token", body = UnauthorizedEnvelope),
    )
)]
#[post("")]
pub async fn create_bookmark(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    ensure_required_fields(&payload)?;
    let new_bookmark = validate_new_bookmark(&payload)?;

    let created = app_state.repository.create(new_bookmark).await?;
    log::info!(
        "request_id={} Bookmark with id {} created",
        request_id(&req),
        created.id
    );

    let location = location_for(req.path(), &created.id);
    Ok(HttpResponse::Created()
        .insert_header((LOCATION, location))
        .json(sanitize_bookmark(created)))
}

#[utoipa::path(
    delete,
    path = "/bookmarks/{id}",
    tag = "Bookmarks",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "Bookmark id")
    ),
    responses(
        (status = 204, description = "Bookmark deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = UnauthorizedEnvelope),
        (status = 404, description = "Bookmark not found", body = ErrorEnvelope),
    )
)]
#[delete("/{id}")]
pub async fn delete_bookmark(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    app_state.repository.delete_by_id(&id).await.inspect_err(|err| {
        if matches!(err, AppError::NotFound) {
            log::warn!("Bookmark with id {} not found", id);
        }
    })?;

    log::info!("request_id={} Bookmark with id {} deleted", request_id(&req), id);
    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookmarks")
            .service(list_bookmarks)
            .service(create_bookmark)
            .service(get_bookmark)
            .service(delete_bookmark)
            .default_service(web::to(unmatched_route)),
    );
}
