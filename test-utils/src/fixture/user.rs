//! User fixtures for creating in-memory test data.

use entity::user;

pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000001";
pub const DEFAULT_FIRST_NAME: &str = "James";
pub const DEFAULT_LAST_NAME: &str = "Foo";
pub const DEFAULT_EMAIL: &str = "james@foo.com";

/// Placeholder hash. Tests that log in must set a real argon2 hash.
pub const DEFAULT_ENCRYPTED_PASSWORD: &str = "not-a-real-hash";

/// Creates a non-admin user entity model with default values.
pub fn entity() -> user::Model {
    user::Model {
        id: DEFAULT_ID.to_string(),
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        encrypted_password: DEFAULT_ENCRYPTED_PASSWORD.to_string(),
        is_admin: false,
    }
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder { entity: entity() }
}

/// Builder for user entity models with custom values.
pub struct UserEntityBuilder {
    entity: user::Model,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
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

    pub fn encrypted_password(mut self, encrypted_password: impl Into<String>) -> Self {
        self.entity.encrypted_password = encrypted_password.into();
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.entity.is_admin = is_admin;
        self
    }

    pub fn build(self) -> user::Model {
        self.entity
    }
}
