//! Session-related types.
//!
//! Types stored in the session: the authenticated user's identity and
//! one-shot flash messages consumed by the next rendered page.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use taffreen_core::{Email, UserId};

use crate::models::user::User;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user. The
/// `session_epoch` is the value at login time; auth extractors compare it
/// against the database so a password change elsewhere logs this session
/// out on its next request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// User's display name.
    pub name: String,
    /// Staff role flag at login time.
    pub is_staff: bool,
    /// Superuser role flag at login time.
    pub is_superuser: bool,
    /// Session epoch snapshot taken at login.
    pub session_epoch: i32,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            session_epoch: user.session_epoch,
        }
    }
}

/// A one-shot message rendered on the next page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    /// "success" or "error"; used as a CSS class.
    pub kind: String,
    /// Message text.
    pub message: String,
}

impl Flash {
    /// A success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".to_owned(),
            message: message.into(),
        }
    }

    /// An error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error".to_owned(),
            message: message.into(),
        }
    }
}

/// Session keys for stored data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the pending flash message.
    pub const FLASH: &str = "flash";
}

/// Queue a flash message for the next rendered page.
///
/// Session write failures are logged and swallowed; losing a flash message
/// never fails the request that queued it.
pub async fn push_flash(session: &Session, flash: Flash) {
    if let Err(e) = session.insert(session_keys::FLASH, flash).await {
        tracing::warn!("Failed to store flash message: {e}");
    }
}

/// Take (and clear) the pending flash message, if any.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    session
        .remove::<Flash>(session_keys::FLASH)
        .await
        .ok()
        .flatten()
}

/// Helper to set the current user in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
