pub mod bookmarks;
pub mod docs;
pub mod middleware;
pub mod root;
pub mod sanitizer;
pub mod validation;

use actix_cors::Cors;
use actix_web::{
    App, HttpRequest, HttpResponse,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::JsonPayloadError,
    http::header,
    middleware::{Logger, NormalizePath, TrailingSlash},
    web,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, config::Config, errors::AppError};
use self::{
    docs::ApiDoc,
    middleware::{BearerAuth, RequestId},
};

/// Builds the complete application: shared state, body limits, middleware, docs and
/// every authenticated route. `main` and the integration tests share this wiring.
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = state.config.clone();
    let swagger_ui = config.swagger_ui_enabled();

    let json_config = web::JsonConfig::default()
        .limit(config.effective_max_body_bytes())
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(cors(&config))
        .wrap(RequestId)
        .wrap(Logger::default())
        .configure(move |cfg| {
            if swagger_ui {
                cfg.service(
                    SwaggerUi::new("/swagger-ui/{_:.*}")
                        .url("/api-docs/openapi.json", ApiDoc::openapi()),
                );
            }
        })
        .service(
            web::scope("")
                .wrap(NormalizePath::new(TrailingSlash::Trim))
                .wrap(BearerAuth::new(&config.api_token))
                .configure(root::init_routes)
                .configure(bookmarks::init_routes)
                .default_service(web::to(unmatched_route)),
        )
}

/// Fallback for the authenticated scope. Known resources answer 405 for methods they
/// do not route, everything else is 404; both use the structured error envelope.
pub async fn unmatched_route(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let path = req.path().to_string();
    let method = req.method().to_string();
    log::warn!("No route for {} {}", method, path);

    if is_known_path(&path) {
        Err(AppError::MethodNotAllowed { method, path })
    } else {
        Err(AppError::RouteNotFound(path))
    }
}

fn is_known_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    match path.strip_prefix("/bookmarks") {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('/')
            .is_some_and(|id| !id.is_empty() && !id.contains('/')),
        None => false,
    }
}

fn cors(config: &Config) -> Cors {
    let cors = match config.cors_allowed_origin.as_deref() {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body on {}: {}", req.path(), err);
    let reason = match err {
        JsonPayloadError::ContentType => "Content-Type must be application/json",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "body exceeds the configured size limit"
        }
        _ => "body must be a JSON object",
    };
    AppError::InvalidBody(reason.to_string()).into()
}
