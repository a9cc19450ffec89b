//! User service for business logic.
//!
//! This module provides the `UserService` for registration, profile updates and admin
//! bootstrap. Passwords are hashed here before anything reaches the repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, NewUser, UpdateUserParams, User, UserField},
    service::auth::password::hash_password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user.
    ///
    /// # Arguments
    /// - `params` - Validated user data with a plaintext password
    /// - `is_admin` - Whether the new account has admin privileges
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::PasswordHashErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams, is_admin: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest("email already in use".to_string()));
        }

        let user = user_repo
            .create(NewUser {
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                encrypted_password: hash_password(&params.password)?,
                is_admin,
            })
            .await?;

        tracing::info!("Created user {} (admin: {})", user.id, user.is_admin);

        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::not_found)
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).find_all().await?)
    }

    /// Applies a partial update to a user, re-hashing a new password.
    ///
    /// # Returns
    /// - `Ok(())` - User updated
    /// - `Err(AppError::BadRequest)` - Nothing to update, or email taken by another user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update(&self, id: &str, params: UpdateUserParams) -> Result<(), AppError> {
        if params.is_empty() {
            return Err(AppError::invalid_params());
        }

        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::BadRequest("email already in use".to_string()));
                }
            }
        }

        let mut fields = Vec::new();
        if let Some(first_name) = params.first_name {
            fields.push(UserField::FirstName(first_name));
        }
        if let Some(last_name) = params.last_name {
            fields.push(UserField::LastName(last_name));
        }
        if let Some(email) = params.email {
            fields.push(UserField::Email(email));
        }
        if let Some(password) = params.password {
            fields.push(UserField::EncryptedPassword(hash_password(&password)?));
        }

        if !user_repo.update(id, fields).await? {
            return Err(AppError::not_found());
        }

        Ok(())
    }

    /// Deletes a user and their bookings. Deleting a missing id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        UserRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    /// Checks whether at least one admin account exists.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).admin_exists().await?)
    }
}
