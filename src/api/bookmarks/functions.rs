use actix_web::{HttpMessage, HttpRequest};

use crate::api::middleware::RequestIdValue;

pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestIdValue>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// `Location` value for a freshly created bookmark, relative to the collection path.
pub fn location_for(collection_path: &str, id: &str) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}
