//! Registration, login, and logout route handlers.

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
use crate::models::session::{self, CurrentUser, Flash};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub email: String,
    pub name: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
    pub flash: Option<Flash>,
}

/// Display the registration form.
#[instrument(skip_all)]
pub async fn register_page() -> RegisterTemplate {
    RegisterTemplate {
        error: None,
        email: String::new(),
        name: String::new(),
    }
}

/// Register a new account.
///
/// Validation failures (malformed email, weak password, taken email) are
/// surfaced inline on the form rather than as bare error pages.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let name = form.name.trim();
    if name.is_empty() {
        let page = RegisterTemplate {
            error: Some("Name is required.".to_owned()),
            email: form.email,
            name: String::new(),
        };
        return Ok(page.into_response());
    }

    match AuthService::new(state.pool())
        .register(&form.email, name, &form.password)
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Registration successful");
            session::push_flash(
                &session,
                Flash::success("Congratulations! Registration successful!"),
            )
            .await;
            Ok(Redirect::to("/auth/login").into_response())
        }
        Err(e @ (AuthError::EmailTaken | AuthError::WeakPassword(_) | AuthError::InvalidEmail(_))) => {
            let message = match e {
                AuthError::EmailTaken => "An account with this email already exists.".to_owned(),
                AuthError::WeakPassword(msg) => format!("{msg}."),
                _ => "Please enter a valid email address.".to_owned(),
            };
            let page = RegisterTemplate {
                error: Some(message),
                email: form.email,
                name: name.to_owned(),
            };
            Ok(page.into_response())
        }
        Err(e) => Err(AppError::from(e)),
    }
}

/// Display the login form.
#[instrument(skip_all)]
pub async fn login_page(session: Session) -> LoginTemplate {
    let flash = session::take_flash(&session).await;
    LoginTemplate {
        error: None,
        email: String::new(),
        flash,
    }
}

/// Log in with email and password.
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
            let current = CurrentUser::from(&user);
            session::set_current_user(&session, &current)
                .await
                .map_err(|e| AppError::Internal(format!("failed to store session: {e}")))?;

            tracing::info!(user_id = %user.id, "Login successful");
            Ok(Redirect::to("/").into_response())
        }
        Err(
            AuthError::InvalidCredentials | AuthError::UserNotFound | AuthError::InvalidEmail(_),
        ) => {
            let page = LoginTemplate {
                error: Some("Invalid email or password.".to_owned()),
                email: form.email,
                flash: None,
            };
            Ok(page.into_response())
        }
        Err(e) => Err(AppError::from(e)),
    }
}

/// Log out the current user.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    session::clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    session::push_flash(&session, Flash::success("You have been logged out.")).await;
    Ok(Redirect::to("/"))
}
