use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::DatabaseError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Creates the database file (and its parent directory) when missing.
pub fn init(db_path: &str) -> Result<(), DatabaseError> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }
    Ok(())
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>, DatabaseError> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder().build(manager)?;
    Ok(Arc::new(pool))
}

pub fn run_migrations(pool: &DbPool) -> Result<(), DatabaseError> {
    let mut conn = get_connection(pool)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    Ok(())
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, DatabaseError> {
    pool.get().map_err(DatabaseError::PoolCreationFailed)
}

fn create_db_file(db_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(db_path);

    if let Some(db_dir) = path.parent() {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir)
                .map_err(|e| DatabaseError::FileCreationFailed(e.to_string()))?;
        }
    }

    fs::File::create(path).map_err(|e| DatabaseError::FileCreationFailed(e.to_string()))?;
    Ok(())
}
