//! lawctl-core: schema definitions and admin operations for the law/party database
//!
//! This crate owns everything below the CLI surface:
//! - Connection configuration from environment variables (`config`)
//! - Declarative table descriptors and enum vocabularies (`schema`)
//! - The shared connection pool and scoped sessions (`db`)
//! - One-shot administrative operations: version probe, create-all,
//!   drop-all (`ops`)
//!
//! Row data is loaded and maintained by external processes; nothing in this
//! crate writes rows. The schema descriptors are the single source of truth
//! for generated DDL, so the SQL previewed by the CLI is exactly the SQL the
//! create operation executes.

pub mod config;
pub mod db;
pub mod error;
pub mod ops;
pub mod schema;

pub use config::DbConfig;
pub use db::{begin_session, connect_pool, Session};
pub use error::{DbError, Result};
pub use sqlx::MySqlPool;
