use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 2, message = "firstName length should be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "lastName length should be at least 2 characters"))]
    pub last_name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 7, message = "password length should be at least 7 characters"))]
    pub password: String,
}

/// Partial user update. Absent or empty fields are left untouched.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 2, message = "firstName length should be at least 2 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 2, message = "lastName length should be at least 2 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[validate(length(min = 7, message = "password length should be at least 7 characters"))]
    pub password: Option<String>,
}

impl UpdateUserDto {
    /// Treats empty strings the same as omitted fields.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.filter(|v| !v.is_empty()),
            last_name: self.last_name.filter(|v| !v.is_empty()),
            email: self.email.filter(|v| !v.is_empty()),
            password: self.password.filter(|v| !v.is_empty()),
        }
    }
}
