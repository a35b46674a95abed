//! In-memory catalogs for tests.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Column values of one seeded row, `is_postgame` in its stored text form.
pub type MoonRow = (i64, &'static str, &'static str, i64, &'static str);

pub fn moon_row(
    id: i64,
    name: &'static str,
    kingdom: &'static str,
    moon_type: i64,
    is_postgame: &'static str,
) -> MoonRow {
    (id, name, kingdom, moon_type, is_postgame)
}

/// Empty in-memory database on a single, never-recycled connection.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

/// Create the `moons` table and insert `rows`.
pub async fn seed(pool: &SqlitePool, rows: &[MoonRow]) {
    sqlx::query(
        r#"
        CREATE TABLE moons (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            kingdom TEXT NOT NULL,
            moon_type INTEGER NOT NULL,
            is_postgame TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .expect("create moons table");

    for &(id, name, kingdom, moon_type, is_postgame) in rows {
        sqlx::query(
            "INSERT INTO moons (id, name, kingdom, moon_type, is_postgame) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(kingdom)
        .bind(moon_type)
        .bind(is_postgame)
        .execute(pool)
        .await
        .expect("insert moon row");
    }
}

pub async fn seeded_pool(rows: &[MoonRow]) -> SqlitePool {
    let pool = memory_pool().await;
    seed(&pool, rows).await;
    pool
}
