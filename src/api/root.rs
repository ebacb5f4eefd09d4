use actix_web::{get, web, HttpResponse};

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Greeting", body = String),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
#[get("/")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello, world!")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello);
}
