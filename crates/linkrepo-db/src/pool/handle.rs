//! Query execution target shared by the repositories
//!
//! A repository either talks to the pool directly or to one open transaction.
//! The transaction sits behind an async mutex so the directory and link
//! repositories of a unit of work can share it; it is taken out of the
//! `Option` on commit or rollback.

use std::sync::Arc;

use sqlx::postgres::{PgArguments, PgPool, PgQueryResult, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, Postgres, Transaction};
use tokio::sync::Mutex;

/// Transaction shared between the repositories of one unit of work
pub type SharedTransaction = Arc<Mutex<Option<Transaction<'static, Postgres>>>>;

/// Where a repository sends its queries
#[derive(Clone)]
pub enum DbHandle {
    Pool(PgPool),
    Transaction(SharedTransaction),
}

impl DbHandle {
    /// Run a statement and return the affected row count
    pub async fn execute(
        &self,
        query: Query<'_, Postgres, PgArguments>,
    ) -> Result<PgQueryResult, sqlx::Error> {
        match self {
            Self::Pool(pool) => query.execute(pool).await,
            Self::Transaction(tx) => {
                let mut guard = tx.lock().await;
                // A finished transaction has released its connection
                let conn = guard.as_mut().ok_or(sqlx::Error::PoolClosed)?;
                query.execute(&mut **conn).await
            }
        }
    }

    /// Fetch exactly one row
    pub async fn fetch_one<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<T, sqlx::Error>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        match self {
            Self::Pool(pool) => query.fetch_one(pool).await,
            Self::Transaction(tx) => {
                let mut guard = tx.lock().await;
                let conn = guard.as_mut().ok_or(sqlx::Error::PoolClosed)?;
                query.fetch_one(&mut **conn).await
            }
        }
    }

    /// Fetch at most one row
    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        match self {
            Self::Pool(pool) => query.fetch_optional(pool).await,
            Self::Transaction(tx) => {
                let mut guard = tx.lock().await;
                let conn = guard.as_mut().ok_or(sqlx::Error::PoolClosed)?;
                query.fetch_optional(&mut **conn).await
            }
        }
    }

    /// Fetch all rows
    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Vec<T>, sqlx::Error>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        match self {
            Self::Pool(pool) => query.fetch_all(pool).await,
            Self::Transaction(tx) => {
                let mut guard = tx.lock().await;
                let conn = guard.as_mut().ok_or(sqlx::Error::PoolClosed)?;
                query.fetch_all(&mut **conn).await
            }
        }
    }
}

impl From<PgPool> for DbHandle {
    fn from(pool: PgPool) -> Self {
        Self::Pool(pool)
    }
}
