//! Connection pool and scoped sessions.
//!
//! One pool per process, constructed by the top-level composition routine
//! and passed explicitly into every operation that needs it. Borrowed
//! connections are liveness-checked before handout (pre-ping); broken
//! connections are discarded and replaced instead of surfacing to the
//! caller. There is no retry policy beyond that: an unreachable database
//! fails the acquire and the error propagates unmodified.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, MySqlPool, Transaction};
use tracing::debug;

use crate::config::DbConfig;
use crate::error::Result;

/// Upper bound on pooled connections; concurrent callers beyond this wait
const MAX_CONNECTIONS: u32 = 5;

/// A scoped transactional unit of work.
///
/// Commits only on an explicit [`Transaction::commit`]; dropping the guard
/// on any other exit path (normal return, early return, panic unwind)
/// rolls the transaction back and returns the connection to the pool.
pub type Session = Transaction<'static, MySql>;

/// Build the shared connection pool from resolved configuration.
///
/// `test_before_acquire` is the pre-ping: every borrowed connection is
/// probed first and dead ones are replaced transparently.
pub async fn connect_pool(config: &DbConfig) -> Result<MySqlPool> {
    debug!("connecting pool to {}:{}/{}", config.host, config.port, config.database);
    let pool = MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .test_before_acquire(true)
        .connect(&config.database_url())
        .await?;
    Ok(pool)
}

/// Open a new transactional session on the pool.
///
/// Sessions never auto-commit; the caller finalizes with `commit()` or
/// lets the drop guard roll back.
pub async fn begin_session(pool: &MySqlPool) -> Result<Session> {
    Ok(pool.begin().await?)
}
