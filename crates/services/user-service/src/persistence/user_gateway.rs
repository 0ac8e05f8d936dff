//! SeaORM-backed [`UserGateway`].

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use domain::{Email, Identifier, PasswordEncoder, StoreError, User, UserGateway};

fn store_error(err: DbErr) -> StoreError {
    StoreError::with_source("database error", err)
}

/// Relational user gateway.
///
/// Email uniqueness is guaranteed by the `users.email` unique index; a
/// duplicate that slips past the use-case check fails in `save`.
pub struct SeaOrmUserGateway {
    db: DatabaseConnection,
    encoder: Arc<dyn PasswordEncoder>,
}

impl SeaOrmUserGateway {
    pub fn new(db: DatabaseConnection, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { db, encoder }
    }

    fn to_aggregate(&self, model: Option<user::Model>) -> Result<Option<User>, StoreError> {
        model
            .map(|m| m.into_aggregate(self.encoder.as_ref()))
            .transpose()
    }
}

#[async_trait]
impl UserGateway for SeaOrmUserGateway {
    async fn save(&self, user: User) -> Result<User, StoreError> {
        let model = ActiveModel::from(&user);

        UserEntity::insert(model)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_columns([
                        user::Column::Email,
                        user::Column::Password,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        // Read back what the store actually holds
        self.find_by_id(user.id())
            .await?
            .ok_or_else(|| StoreError::new(format!("user {} vanished after save", user.id())))
    }

    async fn find_by_id(&self, id: &Identifier) -> Result<Option<User>, StoreError> {
        let result = UserEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        self.to_aggregate(result)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email.address()))
            .one(&self.db)
            .await
            .map_err(store_error)?;

        self.to_aggregate(result)
    }

    async fn delete_by_id(&self, id: &Identifier) -> Result<(), StoreError> {
        UserEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(())
    }
}
