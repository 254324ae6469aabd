//! One-shot administrative operations.
//!
//! Each operation is a single blocking request/response against the
//! database; there is no state here beyond the database itself. Create and
//! drop both walk the schema descriptors, so executed DDL always matches
//! what [`crate::schema::TableDef::create_sql`] renders for preview.

use sqlx::MySqlPool;
use tracing::info;

use crate::error::Result;
use crate::schema;

/// Probe connectivity and report the server version string
pub async fn server_version(pool: &MySqlPool) -> Result<String> {
    let version: String = sqlx::query_scalar("SELECT VERSION()")
        .fetch_one(pool)
        .await?;
    Ok(version)
}

/// Create every table that does not already exist, parents first.
///
/// Never drops or alters an existing table; safe to run repeatedly.
pub async fn create_all(pool: &MySqlPool) -> Result<()> {
    for table in schema::tables() {
        sqlx::query(&table.create_sql()).execute(pool).await?;
        info!("ensured table {}", table.name);
    }
    Ok(())
}

/// Drop all known tables, children first so foreign keys never block.
///
/// Destructive: the caller is responsible for any confirmation gate.
pub async fn drop_all(pool: &MySqlPool) -> Result<()> {
    for table in schema::tables().iter().rev() {
        sqlx::query(&table.drop_sql()).execute(pool).await?;
        info!("dropped table {}", table.name);
    }
    Ok(())
}
