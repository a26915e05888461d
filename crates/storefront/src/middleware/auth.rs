//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring an authenticated session in route
//! handlers. Both extractors verify the session's `session_epoch` snapshot
//! against the database, so a password change elsewhere (e.g. forced by an
//! admin) invalidates the user's other sessions on their next request.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::db::users::UserRepository;
use crate::models::session::{self, CurrentUser, session_keys};
use crate::state::AppState;

/// Extractor that requires an authenticated user.
///
/// If nobody is logged in (or the session is stale), the browser is
/// redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Error returned when authentication is required but absent.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        Redirect::to("/auth/login").into_response()
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AuthRejection)?;

        let user = current_user_if_fresh(&session, state).await.ok_or(AuthRejection)?;

        Ok(Self(user))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject the request if nobody is
/// logged in.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>().cloned() {
            Some(session) => current_user_if_fresh(&session, state).await,
            None => None,
        };

        Ok(Self(user))
    }
}

/// Read the current user from the session and confirm the session is not
/// stale.
///
/// A session is stale when the user no longer exists or their
/// `session_epoch` has moved on (password was force-changed); stale
/// sessions are cleared so the user is simply logged out.
async fn current_user_if_fresh(session: &Session, state: &AppState) -> Option<CurrentUser> {
    let user: CurrentUser = session
        .get(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()?;

    let epoch = UserRepository::new(state.pool())
        .session_epoch(user.id)
        .await
        .ok()
        .flatten();

    if epoch == Some(user.session_epoch) {
        return Some(user);
    }

    tracing::debug!(user_id = %user.id, "Clearing stale session");
    if let Err(e) = session::clear_current_user(session).await {
        tracing::warn!("Failed to clear stale session: {e}");
    }

    None
}
