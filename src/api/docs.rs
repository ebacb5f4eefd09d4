use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::api::{bookmarks, root};
use crate::database::models::bookmarks as bookmark_models;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::hello,
        bookmarks::list_bookmarks,
        bookmarks::get_bookmark,
        bookmarks::create_bookmark,
        bookmarks::delete_bookmark,
    ),
    components(
        schemas(
            bookmark_models::Model,
            bookmarks::CreateBookmarkRequest,
            bookmarks::ErrorEnvelope,
            bookmarks::ErrorMessageBody,
            bookmarks::UnauthorizedEnvelope,
        )
    ),
    modifiers(&BearerTokenAddon),
    tags(
        (name = "Root", description = "Service greeting"),
        (name = "Bookmarks", description = "Bookmark management endpoints")
    )
)]
pub struct ApiDoc;

pub struct BearerTokenAddon;

impl Modify for BearerTokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
