//! # linkrepo-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `linkrepo-core`. It handles:
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations and the transaction coordinator
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkrepo_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use linkrepo_db::repositories::PgUserRepository;
//! use linkrepo_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: "postgres://localhost/db_repositoryapp".to_string(),
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, DbHandle, PgPool, MIGRATOR};
pub use repositories::{
    PgDirectoryRepository, PgLinkRepository, PgTransactor, PgUnitOfWork, PgUserRepository,
};
