use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};

use super::{models::bookmarks, DB};

/// Creates the `bookmarks` table from its entity definition unless it already exists.
pub async fn ensure_schema(db: &DB) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(bookmarks::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    log::info!("Schema ready: table `bookmarks`");
    Ok(())
}

/// Deletes every stored bookmark, returning how many rows were removed.
pub async fn wipe(db: &DB) -> Result<u64, DbErr> {
    let result = bookmarks::Entity::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}
