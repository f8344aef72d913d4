//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::domain::Email;
use crate::errors::{AppError, AppResult};

/// User aggregate root.
///
/// Owns exactly one [`Email`] value object. The identifier is assigned by
/// the storage layer on creation; a freshly constructed User has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Storage-assigned identifier (None before persistence)
    pub id: Option<i64>,
    pub name: String,
    pub email: Email,
}

impl User {
    /// Create a new, not-yet-persisted user.
    ///
    /// # Errors
    /// Returns `AppError::InvalidArgument` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, email: Email) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument("name must not be empty"));
        }
        Ok(Self {
            id: None,
            name,
            email,
        })
    }

    /// Rehydrate a persisted user from its stored fields.
    pub fn from_record(id: i64, name: String, email: Email) -> Self {
        Self {
            id: Some(id),
            name,
            email,
        }
    }

    /// Change the user's name.
    ///
    /// A blank new name is silently ignored by design: the current name is
    /// kept and no error is surfaced.
    pub fn change_name(&mut self, new_name: &str) {
        if !new_name.trim().is_empty() {
            self.name = new_name.to_string();
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

/// User response (returned to clients)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: i64,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

impl TryFrom<User> for UserResponse {
    type Error = AppError;

    /// Fails only if the user was never persisted (no identifier assigned).
    fn try_from(user: User) -> AppResult<Self> {
        let id = user
            .id
            .ok_or_else(|| AppError::internal("user has no assigned identifier"))?;
        Ok(Self {
            id,
            name: user.name,
            email: user.email.into_string(),
        })
    }
}
