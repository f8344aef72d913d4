//! Unit of Work pattern implementation.
//!
//! A scoped unit of work: each combinator opens a transaction, hands the
//! enclosed closure a repository bound to that transaction, commits on
//! success and rolls back on any error. The underlying connection is
//! released on all exit paths.

use async_trait::async_trait;
use sea_orm::{AccessMode, DatabaseConnection, IsolationLevel, TransactionTrait};

use super::repositories::{TxUserRepository, UserRepository};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by unit-of-work closures.
pub type UowFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Note: the generic methods make this trait non-object-safe; services are
/// generic over their unit of work instead of holding a trait object.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure within a read-write transaction.
    ///
    /// Committed on success, rolled back in full on any error.
    async fn read_write<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UserRepository) -> UowFuture<'a, T> + Send,
        T: Send;

    /// Execute a closure within a read-only transaction.
    async fn read_only<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UserRepository) -> UowFuture<'a, T> + Send,
        T: Send;
}

/// Concrete implementation of UnitOfWork over a SeaORM connection.
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Internal transaction execution with configurable access mode
    async fn execute_transaction<F, T>(&self, access: AccessMode, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UserRepository) -> UowFuture<'a, T> + Send,
        T: Send,
    {
        // Begin transaction with ReadCommitted for balanced consistency/performance
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(access))
            .await
            .map_err(AppError::from)?;

        let repo = TxUserRepository::new(&txn);

        // Execute the closure
        match f(&repo).await {
            Ok(result) => {
                // Commit on success - txn is owned, so this always works
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                // Rollback on error
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn read_write<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UserRepository) -> UowFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(AccessMode::ReadWrite, f).await
    }

    async fn read_only<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UserRepository) -> UowFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(AccessMode::ReadOnly, f).await
    }
}
