use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::AUTH_HEADER,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::auth::Identity,
        service::auth::token::TokenService,
    },
};

pub enum Permission {
    Admin,
}

/// Authenticates a request from its `X-Authorization` header.
///
/// The token only proves who the caller is; admin status is read from the database so it
/// reflects the current state of the account.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Verifies the caller's token and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Authenticated caller holding all permissions
    /// - `Err(AuthError::MissingToken)` - No or unreadable header
    /// - `Err(AuthError::InvalidToken | ExpiredToken)` - Token rejected
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject was deleted
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Identity, AppError> {
        let Some(token) = self
            .headers
            .get(AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(&claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(Identity::from(&user))
    }
}
