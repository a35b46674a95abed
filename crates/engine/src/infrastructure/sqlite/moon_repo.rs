//! SQLite-backed moon catalog.

use async_trait::async_trait;
use moonfinder_domain::{Moon, MoonId, MoonName, MoonSummary};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{MoonRepo, RepoError};

/// SQLite implementation of the read-only moon catalog.
///
/// Every query binds its inputs; kingdom names coming from voice input
/// never reach the SQL text.
pub struct SqliteMoonRepo {
    pool: SqlitePool,
}

impl SqliteMoonRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_moon(row: &SqliteRow) -> Result<Moon, RepoError> {
    let id: i64 = row.try_get("id").map_err(RepoError::serialization)?;
    let name: String = row.try_get("name").map_err(RepoError::serialization)?;
    let kingdom: String = row.try_get("kingdom").map_err(RepoError::serialization)?;
    let moon_type: i64 = row.try_get("moon_type").map_err(RepoError::serialization)?;

    Ok(Moon::new(
        MoonId::new(id).map_err(RepoError::serialization)?,
        MoonName::new(name).map_err(RepoError::serialization)?,
        kingdom,
        moon_type,
        postgame_from_row(row)?,
    ))
}

/// The flag is seeded as the text "True"/"False"; native booleans are read too.
fn postgame_from_row(row: &SqliteRow) -> Result<bool, RepoError> {
    if let Ok(text) = row.try_get::<String, _>("is_postgame") {
        return Ok(Moon::parse_postgame_flag(&text));
    }
    row.try_get::<bool, _>("is_postgame")
        .map_err(RepoError::serialization)
}

fn row_to_summary(row: &SqliteRow) -> Result<MoonSummary, RepoError> {
    let id: i64 = row.try_get("id").map_err(RepoError::serialization)?;
    let name: String = row.try_get("name").map_err(RepoError::serialization)?;
    let kingdom: String = row.try_get("kingdom").map_err(RepoError::serialization)?;

    Ok(MoonSummary {
        id: MoonId::new(id).map_err(RepoError::serialization)?,
        name: MoonName::new(name).map_err(RepoError::serialization)?,
        kingdom,
    })
}

fn to_count(value: i64) -> Result<u64, RepoError> {
    u64::try_from(value).map_err(RepoError::serialization)
}

fn to_offset(offset: u64, operation: &'static str) -> Result<i64, RepoError> {
    i64::try_from(offset).map_err(|e| RepoError::database(operation, e))
}

#[async_trait]
impl MoonRepo for SqliteMoonRepo {
    async fn count(&self) -> Result<u64, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM moons")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("moons.count", e))?;
        to_count(count)
    }

    async fn get(&self, id: MoonId) -> Result<Option<Moon>, RepoError> {
        let row = sqlx::query(
            "SELECT id, name, kingdom, moon_type, is_postgame FROM moons WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("moons.get", e))?;

        row.as_ref().map(row_to_moon).transpose()
    }

    async fn get_nth(&self, offset: u64) -> Result<Option<Moon>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, kingdom, moon_type, is_postgame
            FROM moons
            ORDER BY id
            LIMIT 1 OFFSET ?
            "#,
        )
        .bind(to_offset(offset, "moons.get_nth")?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("moons.get_nth", e))?;

        row.as_ref().map(row_to_moon).transpose()
    }

    async fn count_in_kingdom(&self, kingdom: &str) -> Result<u64, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM moons WHERE kingdom = ?")
            .bind(kingdom)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("moons.count_in_kingdom", e))?;
        to_count(count)
    }

    async fn get_nth_in_kingdom(
        &self,
        kingdom: &str,
        offset: u64,
    ) -> Result<Option<Moon>, RepoError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, kingdom, moon_type, is_postgame
            FROM moons
            WHERE kingdom = ?
            ORDER BY id
            LIMIT 1 OFFSET ?
            "#,
        )
        .bind(kingdom)
        .bind(to_offset(offset, "moons.get_nth_in_kingdom")?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("moons.get_nth_in_kingdom", e))?;

        row.as_ref().map(row_to_moon).transpose()
    }

    async fn list(&self) -> Result<Vec<Moon>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, name, kingdom, moon_type, is_postgame FROM moons ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("moons.list", e))?;

        rows.iter().map(row_to_moon).collect()
    }

    async fn list_brief(&self) -> Result<Vec<MoonSummary>, RepoError> {
        let rows = sqlx::query("SELECT id, name, kingdom FROM moons ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("moons.list_brief", e))?;

        rows.iter().map(row_to_summary).collect()
    }

    async fn list_kingdoms(&self) -> Result<Vec<String>, RepoError> {
        sqlx::query_scalar("SELECT DISTINCT kingdom FROM moons ORDER BY kingdom")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("moons.list_kingdoms", e))
    }
}
