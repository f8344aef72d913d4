//! Application state - Dependency injection container.
//!
//! Services are assembled once at process start with explicit
//! constructor-based composition; no runtime wiring.

use std::sync::Arc;

use crate::infra::{Database, Persistence};
use crate::services::{UserManager, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state from a database connection.
    ///
    /// Wires the service to a SeaORM-backed Unit of Work.
    pub fn from_database(database: &Database) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));
        Self {
            user_service: Arc::new(UserManager::new(uow)),
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
