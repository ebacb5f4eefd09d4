use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body accepted by `POST /bookmarks`.
///
/// Handlers read the body as a raw JSON object so that missing and mistyped fields
/// can be reported one at a time; this struct only documents the shape.
#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct CreateBookmarkRequest {
    pub title: String,
    /// Absolute http(s) URL.
    pub url: String,
    pub description: Option<String>,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i32,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorMessageBody {
    pub message: String,
}

/// `{ "error": { "message": ... } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: ErrorMessageBody,
}

/// `{ "error": "Unauthorized request" }`
#[derive(Serialize, ToSchema)]
pub struct UnauthorizedEnvelope {
    pub error: String,
}
