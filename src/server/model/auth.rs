use crate::server::model::user::User;

/// The authenticated caller of a request.
///
/// Produced by `AuthGuard` from a verified access token and passed read-only into services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub is_admin: bool,
}

impl Identity {
    /// Whether this caller may act on a resource owned by `owner_id`.
    ///
    /// Admins may act on anything; everyone else only on their own resources.
    pub fn can_access(&self, owner_id: &str) -> bool {
        self.is_admin || self.user_id == owner_id
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            is_admin: user.is_admin,
        }
    }
}
