//! SQLite connection management

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

/// Open the catalog file read-only.
///
/// Connections are checked out per query and returned to the pool on drop,
/// on error paths too.
pub async fn open_catalog(db_path: impl AsRef<Path>) -> Result<SqlitePool, RepoError> {
    let db_path = db_path.as_ref();
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| RepoError::database("catalog.open", e))?;

    tracing::info!(path = %db_path.display(), "Opened moon catalog");
    Ok(pool)
}
