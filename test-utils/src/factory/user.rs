//! User factory for creating test user entities.

use crate::factory::helpers::{new_uuid, next_id};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db)
///     .email("admin@example.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    /// Creates a factory with fixture defaults, a fresh id and a unique email.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        let entity = fixture::user::entity_builder()
            .id(new_uuid())
            .email(format!("user{}@example.com", n))
            .build();

        Self { db, entity }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    /// Sets the stored password hash. The factory never hashes for you.
    pub fn encrypted_password(mut self, encrypted_password: impl Into<String>) -> Self {
        self.entity.encrypted_password = encrypted_password.into();
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.entity.is_admin = is_admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            email: ActiveValue::Set(self.entity.email),
            encrypted_password: ActiveValue::Set(self.entity.encrypted_password),
            is_admin: ActiveValue::Set(self.entity.is_admin),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
