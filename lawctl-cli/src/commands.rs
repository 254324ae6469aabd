//! Command implementations for the lawctl CLI.
//!
//! Every database-touching command resolves configuration and opens the
//! pool itself; the read-only inspection commands work purely off the
//! schema descriptors and never connect. Driver errors are not translated:
//! they bubble up with context and terminate the command non-zero.

use std::io::IsTerminal;

use anyhow::{bail, Context, Result};
use inquire::Confirm;
use tracing::info;

use lawctl_core::{config, ops, schema, DbConfig, MySqlPool};

/// Resolve configuration from the environment and connect the pool
async fn open_pool() -> Result<MySqlPool> {
    config::load_dotenv();
    let cfg = DbConfig::from_env();
    lawctl_core::connect_pool(&cfg)
        .await
        .context("failed to connect to the database")
}

pub async fn run_connect_db() -> Result<()> {
    let pool = open_pool().await?;
    let version = ops::server_version(&pool)
        .await
        .context("version query failed")?;
    println!("✅ Database connection OK: server version {version}");
    Ok(())
}

pub async fn run_init_db() -> Result<()> {
    let pool = open_pool().await?;
    ops::create_all(&pool)
        .await
        .context("failed to create tables")?;
    println!("✅ Tables created (existing tables were kept)");
    Ok(())
}

pub async fn run_reset_db(yes: bool) -> Result<()> {
    // Gate before anything touches the database: a declined reset must
    // have zero side effects.
    if !yes {
        if !std::io::stdin().is_terminal() {
            bail!("refusing to reset the database without --yes in a non-interactive session");
        }
        let confirmed = Confirm::new("Really drop and recreate all tables?")
            .with_default(false)
            .with_help_message("Every row in every table will be lost")
            .prompt()
            .context("failed to read confirmation")?;
        if !confirmed {
            bail!("reset aborted");
        }
    }

    let pool = open_pool().await?;
    ops::drop_all(&pool)
        .await
        .context("failed to drop tables")?;
    ops::create_all(&pool)
        .await
        .context("failed to recreate tables")?;
    info!("schema reset complete");
    println!("✅ Database reset (all tables recreated empty)");
    Ok(())
}

pub fn run_list_models() {
    for table in schema::tables() {
        println!("📖 {}", table.name);
        for col in table.columns {
            println!("   - {} ({})", col.name, col.ty.sql());
        }
    }
}

pub fn run_show_sql() {
    for table in schema::tables() {
        println!("--- {} ---", table.name);
        println!("{}", table.create_sql());
    }
}
