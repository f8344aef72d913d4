//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Email, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// The stored email was validated when the row was written, so it is
/// rehydrated without re-running the format check.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User::from_record(model.id, model.name, Email::from_stored(model.email))
    }
}
