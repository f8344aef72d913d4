//! User service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;

use user_api::domain::{Email, User};
use user_api::errors::{AppError, AppResult};
use user_api::infra::{UnitOfWork, UowFuture, UserRepository};
use user_api::services::{UserManager, UserService};

mock! {
    UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn save(&self, user: User) -> AppResult<User>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
    }
}

/// Test mock for UnitOfWork that runs closures against a mock repository
/// without a real transaction.
struct TestUnitOfWork {
    repo: MockUserRepo,
}

impl TestUnitOfWork {
    fn new(repo: MockUserRepo) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    async fn read_write<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UserRepository) -> UowFuture<'a, T> + Send,
        T: Send,
    {
        f(&self.repo).await
    }

    async fn read_only<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UserRepository) -> UowFuture<'a, T> + Send,
        T: Send,
    {
        f(&self.repo).await
    }
}

fn service_with(repo: MockUserRepo) -> UserManager<TestUnitOfWork> {
    UserManager::new(Arc::new(TestUnitOfWork::new(repo)))
}

fn stored_user(id: i64) -> User {
    User::from_record(
        id,
        "Ada".to_string(),
        Email::parse("ada@example.com").unwrap(),
    )
}

#[tokio::test]
async fn test_create_user_returns_persisted_user_with_id() {
    let mut repo = MockUserRepo::new();
    repo.expect_save()
        .returning(|user| Ok(User::from_record(1, user.name, user.email)));

    let service = service_with(repo);
    let user = service
        .create_user("Ada".to_string(), "ada@example.com".to_string())
        .await
        .unwrap();

    assert_eq!(user.id, Some(1));
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email.as_str(), "ada@example.com");
}

#[tokio::test]
async fn test_create_user_rejects_malformed_email_before_persisting() {
    let mut repo = MockUserRepo::new();
    repo.expect_save().times(0);

    let service = service_with(repo);
    let result = service
        .create_user("Ada".to_string(), "not-an-email".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidFormat(_))));
}

#[tokio::test]
async fn test_create_user_rejects_blank_name_before_persisting() {
    let mut repo = MockUserRepo::new();
    repo.expect_save().times(0);

    let service = service_with(repo);
    let result = service
        .create_user("   ".to_string(), "ada@example.com".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_create_user_propagates_storage_failure() {
    let mut repo = MockUserRepo::new();
    repo.expect_save()
        .returning(|_| Err(AppError::internal("connection lost")));

    let service = service_with(repo);
    let result = service
        .create_user("Ada".to_string(), "ada@example.com".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Internal(_))));
}

#[tokio::test]
async fn test_find_user_by_id_returns_matching_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .with(eq(42))
        .returning(|id| Ok(Some(stored_user(id))));

    let service = service_with(repo);
    let found = service.find_user_by_id(42).await.unwrap();

    assert_eq!(found.unwrap().id, Some(42));
}

#[tokio::test]
async fn test_find_user_by_id_absent_is_not_an_error() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = service_with(repo);
    let found = service.find_user_by_id(999_999).await.unwrap();

    assert!(found.is_none());
}
