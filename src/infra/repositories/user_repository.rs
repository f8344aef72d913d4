//! User repository - hand-written persistence contract for the User aggregate.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseTransaction, EntityTrait, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Storage contract consumed by the application services.
///
/// The store is a keyed collection of users with a numeric identifier
/// assigned on save and a uniqueness constraint on the email column.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user and return it with its assigned identifier.
    ///
    /// A uniqueness violation on the email surfaces as a database error.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find a user by identifier. Absence is a normal outcome.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
}

/// Transaction-aware user repository.
///
/// Executes all operations within the provided transaction. Uses a borrowed
/// reference so the transaction outlives every repository operation.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Create new transaction-aware repository
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl UserRepository for TxUserRepository<'_> {
    async fn save(&self, user: User) -> AppResult<User> {
        let active_model = ActiveModel {
            // Let the database assign the identifier on first save
            id: user.id.map_or(NotSet, Set),
            name: Set(user.name),
            email: Set(user.email.into_string()),
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }
}
