//! Dashboard login and logout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session::{self, CurrentAdmin};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
}

/// Display the login form.
#[instrument(skip_all)]
pub async fn login_page() -> LoginTemplate {
    LoginTemplate {
        error: None,
        email: String::new(),
    }
}

/// Log in to the dashboard.
///
/// Requires the staff flag on top of valid credentials.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match AuthService::new(state.pool())
        .login(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            let current = CurrentAdmin::from(&user);
            session::set_current_admin(&session, &current)
                .await
                .map_err(|e| AppError::Internal(format!("failed to store session: {e}")))?;

            tracing::info!(user_id = %user.id, "Dashboard login successful");
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(AuthError::InvalidCredentials | AuthError::InvalidEmail(_)) => {
            let page = LoginTemplate {
                error: Some("Invalid email or password.".to_owned()),
                email: form.email,
            };
            Ok(page.into_response())
        }
        Err(AuthError::NotStaff) => {
            let page = LoginTemplate {
                error: Some("This account does not have dashboard access.".to_owned()),
                email: form.email,
            };
            Ok(page.into_response())
        }
        Err(AuthError::Repository(e)) => Err(AppError::from(e)),
        Err(e) => Err(AppError::Internal(e.to_string())),
    }
}

/// Log out of the dashboard.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    session::clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(Redirect::to("/auth/login"))
}
