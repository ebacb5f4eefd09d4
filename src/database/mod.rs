pub mod connector;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export the primary DB types and connect helper for convenient access as `database::connect()`
pub use connector::{DB, connect, connect_with_settings, ping};
pub use repository::BookmarkRepository;
pub use schema::{ensure_schema, wipe};
