use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::{
    models::{bookmarks, NewBookmark},
    DB,
};
use crate::errors::AppError;

const MAX_ID_ATTEMPTS: usize = 3;

/// Sole owner of persisted bookmark state.
///
/// Wraps the pooled connection handed in at construction; clones share the pool, so
/// the repository can be stored in `web::Data` and used from every worker.
#[derive(Clone)]
pub struct BookmarkRepository {
    db: DB,
}

impl BookmarkRepository {
    pub fn new(db: DB) -> Self {
        Self { db }
    }

    /// All bookmarks in insertion order.
    pub async fn list(&self) -> Result<Vec<bookmarks::Model>, AppError> {
        let rows = bookmarks::Entity::find()
            .order_by_asc(bookmarks::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<bookmarks::Model, AppError> {
        bookmarks::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Persists a validated bookmark under a freshly generated id.
    pub async fn create(&self, new_bookmark: NewBookmark) -> Result<bookmarks::Model, AppError> {
        let id = self.fresh_id().await?;

        let bookmark = bookmarks::ActiveModel {
            id: Set(id),
            title: Set(new_bookmark.title),
            url: Set(new_bookmark.url),
            description: Set(new_bookmark.description),
            rating: Set(new_bookmark.rating),
        };

        let created = bookmark.insert(&self.db).await?;
        Ok(created)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let result = bookmarks::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn fresh_id(&self) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = Uuid::now_v7().to_string();
            let existing = bookmarks::Entity::find_by_id(candidate.clone())
                .one(&self.db)
                .await?;
            if existing.is_none() {
                return Ok(candidate);
            }
            log::warn!("Generated bookmark id {} already exists, retrying", candidate);
        }

        log::error!(
            "Could not generate a unique bookmark id after {} attempts",
            MAX_ID_ATTEMPTS
        );
        Err(AppError::Internal)
    }
}
