//! Database connection utilities.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use osulink_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use tracing::instrument;

/// Pool of SQLite connections.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Connection checked out of a [`SqlitePool`].
pub type SqlitePooledConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies per-connection pragmas when the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Open a single SQLite connection.
///
/// `database_url` is a file path, or `:memory:` for a private in-memory database.
#[instrument(name = "database.establish_connection")]
pub fn establish_connection(database_url: &str) -> DatabaseResult<SqliteConnection> {
    tracing::debug!("Connecting to SQLite database");
    SqliteConnection::establish(database_url).map_err(|e| {
        tracing::error!(error = %e, "Failed to establish database connection");
        DatabaseError::new(DatabaseErrorKind::Connection(e.to_string()))
    })
}

/// Create a connection pool for an SQLite database.
///
/// # Errors
///
/// Returns an error if the initial connections cannot be opened.
#[instrument(name = "database.create_pool")]
pub fn create_pool(database_url: &str, max_size: u32) -> DatabaseResult<SqlitePool> {
    tracing::debug!("Creating SQLite connection pool");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let mut builder = Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(SqlitePragmas));

    // Every in-memory connection is its own database; keep the one we have alive.
    if database_url == ":memory:" {
        builder = builder.max_size(1).idle_timeout(None).max_lifetime(None);
    }

    builder.build(manager).map_err(|e| {
        tracing::error!(error = %e, "Failed to create connection pool");
        DatabaseError::new(DatabaseErrorKind::Connection(e.to_string()))
    })
}

/// Check a connection out of the pool.
pub fn checkout(pool: &SqlitePool) -> DatabaseResult<SqlitePooledConnection> {
    pool.get().map_err(|e| {
        tracing::error!(error = %e, "Failed to check out pooled connection");
        DatabaseError::new(DatabaseErrorKind::Connection(e.to_string()))
    })
}

/// Apply any migrations that have not run yet.
#[instrument(name = "database.run_migrations", skip(conn))]
pub fn run_migrations(conn: &mut SqliteConnection) -> DatabaseResult<()> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        tracing::error!(error = %e, "Failed to run migrations");
        DatabaseError::new(DatabaseErrorKind::Migration(e.to_string()))
    })?;
    tracing::info!(applied = applied.len(), "Database migrations up to date");
    Ok(())
}
