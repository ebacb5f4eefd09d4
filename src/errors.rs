use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";
pub const NOT_FOUND_MESSAGE: &str = "Bookmark Not Found";
pub const SERVER_ERROR_MESSAGE: &str = "server error";

/// `{ "error": { "message": ... } }`
#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub error: ErrorMessage<'a>,
}

#[derive(Serialize)]
pub struct ErrorMessage<'a> {
    pub message: &'a str,
}

/// `{ "error": "Unauthorized request" }`
#[derive(Serialize)]
pub struct UnauthorizedResponse<'a> {
    pub error: &'a str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbError(#[from] DbErr),

    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    #[error("'{0}' is required")]
    MissingField(&'static str),

    #[error("'{field}' {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Method {method} is not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DbError(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::MissingField(_) | AppError::InvalidField { .. } | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::Unauthorized => builder.json(UnauthorizedResponse {
                error: UNAUTHORIZED_MESSAGE,
            }),
            AppError::MissingField(_) => builder
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
            AppError::DbError(_) | AppError::Internal => {
                log::error!("{} ({})", self, self.code());
                builder.json(ErrorResponse {
                    error: ErrorMessage {
                        message: SERVER_ERROR_MESSAGE,
                    },
                })
            }
            AppError::InvalidField { .. }
            | AppError::InvalidBody(_)
            | AppError::NotFound
            | AppError::RouteNotFound(_)
            | AppError::MethodNotAllowed { .. } => {
                let message = self.to_string();
                builder.json(ErrorResponse {
                    error: ErrorMessage { message: &message },
                })
            }
        }
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DbError(_) => "DB_ERROR",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::InvalidField { .. } => "INVALID_FIELD",
            AppError::InvalidBody(_) => "INVALID_BODY",
            AppError::NotFound => "NOT_FOUND",
            AppError::RouteNotFound(_) => "ROUTE_NOT_FOUND",
            AppError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            AppError::Internal => "INTERNAL",
        }
    }
}
