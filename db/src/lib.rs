#[macro_use]
extern crate log;

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use errors::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Applied to every connection as the pool hands it out. SQLite keeps
/// these settings per connection, not per database file.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn get_conn(pool: &DbPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err);
        err.into()
    })
}

pub fn new_pool(database_url: &str) -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: BUSY_TIMEOUT,
        }))
        .build(manager)
        .map_err(|err| {
            error!("Failed to create db pool - {}", err);
            err.into()
        })
}

/// Brings the schema up to date. Returns the number of migrations applied.
pub fn run_migrations(pool: &DbPool) -> Result<usize, Error> {
    let mut conn = get_conn(pool)?;
    let conn: &mut SqliteConnection = &mut conn;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| Error::InternalServerError(format!("Migrations failed - {}", err)))?;

    for version in &applied {
        info!("Applied migration {}", version);
    }

    Ok(applied.len())
}

#[cfg(test)]
pub(crate) mod tests {
    use tempfile::TempDir;

    use super::{new_pool, run_migrations, DbPool};

    /// Fresh migrated database. Keep the `TempDir` alive for as long as the pool.
    pub fn test_pool() -> (TempDir, DbPool) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polls.sqlite3");
        let pool = new_pool(path.to_str().unwrap()).unwrap();
        run_migrations(&pool).unwrap();

        (dir, pool)
    }

    #[test]
    fn test_migrations_run_once() {
        let (_dir, pool) = test_pool();
        assert_eq!(run_migrations(&pool).unwrap(), 0);
    }
}
