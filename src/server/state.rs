//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` and cloned into each handler through Axum's state
//! extraction. All fields are cheap to clone.

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::token::TokenService, booking::RoomLocks};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies access tokens.
    pub tokens: TokenService,

    /// Per-room locks serializing booking admission.
    pub room_locks: RoomLocks,
}

impl AppState {
    /// Creates the application state from its collaborators.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self {
            db,
            tokens,
            room_locks: RoomLocks::default(),
        }
    }
}
