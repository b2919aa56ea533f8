/// Database error type
///
/// Storage faults are passed through as-is. A missing row is not an
/// error; lookups return `Option` instead.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
