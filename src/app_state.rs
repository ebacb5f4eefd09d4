use crate::config::Config;
use crate::database::{BookmarkRepository, DB};

#[derive(Clone)]
pub struct AppState {
    pub repository: BookmarkRepository,
    pub config: Config,
}

impl AppState {
    pub fn new(db: DB, config: Config) -> Self {
        Self {
            repository: BookmarkRepository::new(db),
            config,
        }
    }
}
