//! Role-gated authentication extractors for the dashboard.
//!
//! Two gates, matching the two role flags: [`RequireStaff`] for viewing
//! and [`RequireSuperuser`] for user/product mutations. Both delegate the
//! actual decision to [`taffreen_core::is_allowed`] so the permission
//! rules live in one place, and both verify the session's epoch snapshot
//! against the database so force-changed passwords end sessions.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use taffreen_core::{AdminAction, is_allowed};

use crate::db::UserAdminRepository;
use crate::models::session::{self, CurrentAdmin, session_keys};
use crate::state::AppState;

/// Extractor that requires a signed-in staff member.
///
/// Redirects to the login page when nobody is signed in; returns 403 when
/// the signed-in user is not staff.
pub struct RequireStaff(pub CurrentAdmin);

/// Extractor that requires a signed-in superuser.
///
/// Redirects to the login page when nobody is signed in; returns 403 when
/// the signed-in user is staff but not superuser.
pub struct RequireSuperuser(pub CurrentAdmin);

/// Rejection for the role-gated extractors.
pub enum RoleRejection {
    /// Redirect to login page.
    RedirectToLogin,
    /// Signed in, but lacking the required role.
    Forbidden,
}

impl IntoResponse for RoleRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = RoleRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = current_admin(parts, state).await?;

        if !is_allowed(admin.is_staff, admin.is_superuser, AdminAction::ViewDashboard) {
            return Err(RoleRejection::Forbidden);
        }

        Ok(Self(admin))
    }
}

impl FromRequestParts<AppState> for RequireSuperuser {
    type Rejection = RoleRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = current_admin(parts, state).await?;

        if !is_allowed(admin.is_staff, admin.is_superuser, AdminAction::ManageUsers) {
            return Err(RoleRejection::Forbidden);
        }

        Ok(Self(admin))
    }
}

/// Read the signed-in admin from the session, rejecting stale sessions.
async fn current_admin(parts: &mut Parts, state: &AppState) -> Result<CurrentAdmin, RoleRejection> {
    let session = parts
        .extensions
        .get::<Session>()
        .cloned()
        .ok_or(RoleRejection::RedirectToLogin)?;

    let admin: CurrentAdmin = session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
        .ok_or(RoleRejection::RedirectToLogin)?;

    let account = UserAdminRepository::new(state.pool())
        .get(admin.id)
        .await
        .ok()
        .flatten();

    // The stored snapshot must still match the account: same epoch (no
    // forced password change) and still staff.
    match account {
        Some(account) if account.session_epoch == admin.session_epoch => {
            Ok(CurrentAdmin::from(&account))
        }
        _ => {
            if let Err(e) = session::clear_current_admin(&session).await {
                tracing::warn!("Failed to clear stale session: {e}");
            }
            Err(RoleRejection::RedirectToLogin)
        }
    }
}
