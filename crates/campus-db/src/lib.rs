//! # Campus DB
//!
//! Database pool and user persistence for the Campus API.
//!
//! - [`repository`]: The [`UserRepository`] seam used by request handlers
//! - [`postgres`]: SQLx/PostgreSQL implementation
//! - [`errors`]: Reclassification of SQLx failures, lock contention included
//! - `memory`: In-memory implementation (feature `test-utils`)
//!
//! # Example
//!
//! ```ignore
//! use campus_db::{PgUserRepository, init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&std::env::var("DATABASE_URL")?).await?;
//!     run_migrations(&pool).await?;
//!     let users = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod errors;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod repository;

pub use errors::map_sqlx_error;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;
pub use repository::UserRepository;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Connects a PostgreSQL pool to `database_url`.
///
/// The returned pool is cheaply cloneable and meant to be created once at
/// startup.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Applies the migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
