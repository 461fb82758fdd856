//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use firdous_core::{Email, UserId};

/// Session-stored user identity.
///
/// Created at login/registration and destroyed at logout. The token is the
/// opaque credential issued by the auth service; backend calls identify the
/// user by id header, so the token is held only as session evidence and is
/// never refreshed or expiry-checked client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's backend ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Opaque auth token issued at login.
    pub token: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
