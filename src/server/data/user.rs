//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database,
//! converting between entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{NewUser, User, UserField};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a freshly generated id.
    ///
    /// # Arguments
    /// - `user` - User data with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            email: ActiveValue::Set(user.email),
            encrypted_password: ActiveValue::Set(user.encrypted_password),
            is_admin: ActiveValue::Set(user.is_admin),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email, used for login and uniqueness checks.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Lists every user ordered by email.
    pub async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies the given field changes to a user.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `fields` - Columns to overwrite; must not be empty
    ///
    /// # Returns
    /// - `Ok(true)` - User found and updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: &str, fields: Vec<UserField>) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        for field in fields {
            match field {
                UserField::FirstName(value) => active.first_name = ActiveValue::Set(value),
                UserField::LastName(value) => active.last_name = ActiveValue::Set(value),
                UserField::Email(value) => active.email = ActiveValue::Set(value),
                UserField::EncryptedPassword(value) => {
                    active.encrypted_password = ActiveValue::Set(value)
                }
            }
        }
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a user together with their bookings.
    ///
    /// Deleting a missing id is not an error.
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::UserId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::User::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first start)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
