//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{Email, Identifier, Password, PasswordEncoder, StoreError, User, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    /// Encoded password hash
    pub password: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rehydrate the aggregate, re-validating every stored value.
    pub fn into_aggregate(self, encoder: &dyn PasswordEncoder) -> Result<User, StoreError> {
        let corrupt =
            |e: ValidationError| StoreError::with_source(format!("corrupt user row {}", self.id), e);

        let email = Email::with(Some(self.email.as_str())).map_err(corrupt)?;
        let password = Password::with_encoded_value(&self.password, encoder).map_err(corrupt)?;

        User::with(
            Identifier::from_uuid(self.id),
            email,
            password,
            self.created_at,
            self.updated_at,
        )
        .map_err(corrupt)
    }
}

/// Convert domain aggregate to an insertable model
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id().as_uuid()),
            email: Set(user.email().address().to_string()),
            password: Set(user.password().value().to_string()),
            created_at: Set(user.created_at()),
            updated_at: Set(user.updated_at()),
        }
    }
}
