use thiserror::Error;

/// Errors raised while setting up or talking to the database itself.
/// Query-level failures are mapped into domain errors by the repositories.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(#[from] r2d2::Error),

    #[error("Database query failed: {0}")]
    QueryFailed(#[from] diesel::result::Error),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Failed to create database file: {0}")]
    FileCreationFailed(String),
}
