//! User service - orchestrates user use cases over the Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Email, User};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create and persist a new user.
    ///
    /// Validation happens before any persistence attempt: a malformed email
    /// or a blank name rejects the request without touching the store. The
    /// returned user carries the identifier assigned by the store.
    async fn create_user(&self, name: String, email_value: String) -> AppResult<User>;

    /// Look up a user by identifier.
    ///
    /// Absence is a normal outcome, not an error.
    async fn find_user_by_id(&self, id: i64) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn create_user(&self, name: String, email_value: String) -> AppResult<User> {
        // Validate and build the domain objects first
        let email = Email::parse(email_value)?;
        let user = User::new(name, email)?;

        // Persist inside a single read-write transaction
        self.uow
            .read_write(move |repo| Box::pin(async move { repo.save(user).await }))
            .await
    }

    async fn find_user_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.uow
            .read_only(move |repo| Box::pin(async move { repo.find_by_id(id).await }))
            .await
    }
}
