use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Bookmarks ---
pub mod bookmarks {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
    #[sea_orm(table_name = "bookmarks")]
    #[schema(as = Bookmark)]
    pub struct Model {
        /// Server-assigned UUIDv7, time-ordered so that sorting by id follows insertion order.
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub title: String,
        pub url: String,
        pub description: String,
        #[schema(minimum = 1, maximum = 5)]
        pub rating: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// A bookmark that passed validation and is ready to be persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}
