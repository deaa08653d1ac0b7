use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};

use crate::server::model::principal::{Capability, Principal};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a user ID to a principal with its capability grants.
    ///
    /// # Returns
    /// - `Ok(Some(Principal::User))` - User exists
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_principal(&self, id: i32) -> Result<Option<Principal>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let permissions = user
            .find_related(entity::prelude::UserPermission)
            .all(self.db)
            .await?;

        Ok(Some(Principal::from_entity(user, permissions)))
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        username: &str,
        is_superuser: bool,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            is_superuser: ActiveValue::Set(is_superuser),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Grants capabilities to a user. Already granted capabilities are skipped.
    pub async fn grant(&self, user_id: i32, capabilities: &[Capability]) -> Result<(), DbErr> {
        for capability in capabilities {
            let existing = entity::prelude::UserPermission::find_by_id((
                user_id,
                capability.codename().to_string(),
            ))
            .one(self.db)
            .await?;

            if existing.is_none() {
                entity::user_permission::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    codename: ActiveValue::Set(capability.codename().to_string()),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }
}
