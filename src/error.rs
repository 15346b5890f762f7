use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealdexError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Lookup request failed: {0}")]
    Lookup(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, MealdexError>;
