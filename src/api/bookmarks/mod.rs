pub mod functions;
pub mod handlers;
pub mod structures;

pub use handlers::{
    __path_create_bookmark, __path_delete_bookmark, __path_get_bookmark, __path_list_bookmarks,
    create_bookmark, delete_bookmark, get_bookmark, init_routes, list_bookmarks,
};

pub use structures::{CreateBookmarkRequest, ErrorEnvelope, ErrorMessageBody, UnauthorizedEnvelope};
