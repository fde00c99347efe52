pub mod filters;
pub mod models;
pub mod repositories;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Connects to the configured `DATABASE_PATH`.
///
/// For a SQLite file path the parent directory is created first; SQLite
/// won't create intermediate dirs.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    if !config::is_database_url(&path_or_url) {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let url = config::database_url(&path_or_url);
    tracing::debug!(%url, "Connecting to database");
    Database::connect(&url).await
}
