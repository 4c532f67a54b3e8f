pub mod admin;
pub mod event;
pub mod member;
pub mod presence;

use log::info;
use sqlx::sqlite::SqlitePoolOptions;

use crate::DbPool;

pub use admin::AdminStore;
pub use event::EventStore;
pub use member::MemberStore;
pub use presence::PresenceStore;

pub const EVENTS_TABLE_CREATION_QUERY: &str = "CREATE TABLE IF NOT EXISTS events
(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uuid TEXT NOT NULL,
    name TEXT NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    recurring_interval TEXT,
    recurring_until TEXT,
    CONSTRAINT uuid_unique UNIQUE (uuid)
)";

pub const ADMINS_TABLE_CREATION_QUERY: &str = "CREATE TABLE IF NOT EXISTS admins
(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uuid TEXT NOT NULL,
    CONSTRAINT uuid_unique UNIQUE (uuid)
)";

pub const MEMBERS_TABLE_CREATION_QUERY: &str = "CREATE TABLE IF NOT EXISTS members
(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uuid TEXT NOT NULL,
    name TEXT NOT NULL,
    extra TEXT NOT NULL DEFAULT '',
    roles TEXT NOT NULL DEFAULT '[]',
    CONSTRAINT uuid_unique UNIQUE (uuid)
)";

pub const PRESENCES_TABLE_CREATION_QUERY: &str = "CREATE TABLE IF NOT EXISTS presences
(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event_uuid TEXT NOT NULL,
    member_uuid TEXT NOT NULL,
    answer TEXT NOT NULL CHECK (answer IN ('yes', 'no', 'maybe')),
    CONSTRAINT event_member_unique UNIQUE (event_uuid, member_uuid)
)";

pub async fn init_db_pool(db_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    info!("connecting to database: {}", db_url);
    let pool: DbPool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?;
    create_tables(&pool).await?;
    info!("{}", "Connected with sqlite".to_string());
    Ok(pool)
}

/// A private in-memory database. Pinned to one connection that never expires,
/// since every sqlite `:memory:` connection is its own database.
pub async fn in_memory_pool() -> Result<DbPool, sqlx::Error> {
    let pool: DbPool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_tables(&pool).await?;
    Ok(pool)
}

pub async fn create_tables(pool: &DbPool) -> Result<(), sqlx::Error> {
    for query in [
        EVENTS_TABLE_CREATION_QUERY,
        ADMINS_TABLE_CREATION_QUERY,
        MEMBERS_TABLE_CREATION_QUERY,
        PRESENCES_TABLE_CREATION_QUERY,
    ] {
        sqlx::query(query).execute(pool).await?;
    }
    Ok(())
}
