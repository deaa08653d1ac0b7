//! User factory for creating test principals.
//!
//! Users are the principals a bearer credential resolves to. Capabilities are stored
//! as codename rows in `user_permission` and can be granted through the factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("testuser")
///     .permissions(["add_employee", "change_employee"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    is_superuser: bool,
    permissions: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - is_superuser: `false`
    /// - no permissions
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            username: format!("user_{}", next_id()),
            is_superuser: false,
            permissions: Vec::new(),
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the superuser flag.
    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = is_superuser;
        self
    }

    /// Grants the given capability codenames to the user.
    pub fn permissions<I, S>(mut self, codenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = codenames.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the user and its permission rows into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            is_superuser: ActiveValue::Set(self.is_superuser),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !self.permissions.is_empty() {
            entity::prelude::UserPermission::insert_many(self.permissions.into_iter().map(
                |codename| entity::user_permission::ActiveModel {
                    user_id: ActiveValue::Set(user.id),
                    codename: ActiveValue::Set(codename),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a user with default values and no permissions.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
