//! Link storage for osulink.
//!
//! - [`DatabaseLinkStore`] - SQLite via diesel, schema managed by embedded migrations
//! - [`InMemoryLinkStore`] - HashMap-backed store for tests and dry runs
//!
//! Both implement [`osulink_interface::LinkStore`].

mod connection;
mod in_memory;
mod models;
pub mod schema;
mod store;

pub use connection::{
    MIGRATIONS, SqlitePool, SqlitePooledConnection, checkout, create_pool, establish_connection,
    run_migrations,
};
pub use in_memory::InMemoryLinkStore;
pub use models::{LinkedAccountRow, NewLinkedAccount, NewLinkedAccountBuilder};
pub use store::DatabaseLinkStore;
