//! Domain layer - Core business entities and logic
//!
//! Contains the User aggregate root and the Email value object,
//! independent of infrastructure concerns.

pub mod email;
pub mod user;

pub use email::Email;
pub use user::{CreateUser, User, UserResponse};
