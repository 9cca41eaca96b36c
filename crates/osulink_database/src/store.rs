//! Diesel-backed link store.

use crate::connection::{SqlitePool, checkout, create_pool, run_migrations};
use crate::models::{LinkedAccountRow, NewLinkedAccountBuilder};
use crate::schema::linked_accounts;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use osulink_core::{GameMode, LinkRecord};
use osulink_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use osulink_interface::LinkStore;
use tracing::{debug, info, instrument};

/// Link store persisted in SQLite.
///
/// Diesel is synchronous, so every operation checks a connection out of the
/// pool on the blocking thread pool.
#[derive(Clone)]
pub struct DatabaseLinkStore {
    pool: SqlitePool,
}

impl std::fmt::Debug for DatabaseLinkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseLinkStore")
            .field("connections", &self.pool.state().connections)
            .finish()
    }
}

impl DatabaseLinkStore {
    /// Open (creating if needed) the database at `database_url` and bring its schema up to date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use osulink_database::DatabaseLinkStore;
    ///
    /// let store = DatabaseLinkStore::open("osulink.db", 4)?;
    /// # Ok::<(), osulink_error::DatabaseError>(())
    /// ```
    #[instrument(name = "database.open_link_store")]
    pub fn open(database_url: &str, pool_size: u32) -> DatabaseResult<Self> {
        let pool = create_pool(database_url, pool_size)?;
        let mut conn = checkout(&pool)?;
        run_migrations(&mut conn)?;
        info!("Link store ready");
        Ok(Self { pool })
    }

    /// Private in-memory database, mostly for tests.
    pub fn in_memory() -> DatabaseResult<Self> {
        Self::open(":memory:", 1)
    }

    async fn with_conn<T, F>(&self, op: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> DatabaseResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = checkout(&pool)?;
            op(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Task(e.to_string())))?
    }
}

#[async_trait]
impl LinkStore for DatabaseLinkStore {
    #[instrument(skip(self))]
    async fn get(&self, chat_user_id: &str) -> DatabaseResult<Option<LinkRecord>> {
        let key = chat_user_id.to_string();
        self.with_conn(move |conn| {
            linked_accounts::table
                .find(&key)
                .select(LinkedAccountRow::as_select())
                .first::<LinkedAccountRow>(conn)
                .optional()?
                .map(LinkRecord::try_from)
                .transpose()
        })
        .await
    }

    #[instrument(skip(self))]
    async fn set(
        &self,
        chat_user_id: &str,
        osu_user_id: u32,
        osu_username: &str,
        mode: GameMode,
    ) -> DatabaseResult<()> {
        let row = NewLinkedAccountBuilder::default()
            .discord_id(chat_user_id)
            .osu_id(i64::from(osu_user_id))
            .osu_username(osu_username)
            .mode(mode.as_str())
            .created_at(Utc::now().naive_utc())
            .build()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Serialization(e.to_string())))?;

        self.with_conn(move |conn| {
            diesel::replace_into(linked_accounts::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await?;

        info!("Link stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_mode(&self, chat_user_id: &str, mode: GameMode) -> DatabaseResult<bool> {
        let key = chat_user_id.to_string();
        let updated = self
            .with_conn(move |conn| {
                Ok(diesel::update(linked_accounts::table.find(&key))
                    .set(linked_accounts::mode.eq(mode.as_str()))
                    .execute(conn)?)
            })
            .await?;

        debug!(updated, "Default mode update finished");
        Ok(updated > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, chat_user_id: &str) -> DatabaseResult<bool> {
        let key = chat_user_id.to_string();
        let deleted = self
            .with_conn(move |conn| {
                Ok(diesel::delete(linked_accounts::table.find(&key)).execute(conn)?)
            })
            .await?;

        debug!(deleted, "Link delete finished");
        Ok(deleted > 0)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> DatabaseResult<Vec<LinkRecord>> {
        self.with_conn(|conn| {
            linked_accounts::table
                .order(linked_accounts::created_at.asc())
                .select(LinkedAccountRow::as_select())
                .load::<LinkedAccountRow>(conn)?
                .into_iter()
                .map(LinkRecord::try_from)
                .collect()
        })
        .await
    }

    #[instrument(skip(self))]
    async fn count(&self) -> DatabaseResult<u64> {
        let count: i64 = self
            .with_conn(|conn| Ok(linked_accounts::table.count().get_result::<i64>(conn)?))
            .await?;
        Ok(count.max(0) as u64)
    }
}
