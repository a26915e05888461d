//! User management route handlers (superuser only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use taffreen_core::{Email, UserId};

use crate::db::UserAdminRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireSuperuser;
use crate::models::UserAccount;
use crate::models::session::{self, Flash};
use crate::services::auth;
use crate::state::AppState;

/// User edit form data. Checkboxes are absent when unchecked.
#[derive(Debug, Deserialize)]
pub struct UserEditForm {
    pub email: String,
    pub name: String,
    pub is_staff: Option<String>,
    pub is_superuser: Option<String>,
}

/// Force-change password form data.
#[derive(Debug, Deserialize)]
pub struct PasswordForm {
    pub password: String,
}

/// User row display data for templates.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl From<&UserAccount> for UserRow {
    fn from(user: &UserAccount) -> Self {
        Self {
            id: user.id.as_i32(),
            email: user.email.as_str().to_owned(),
            name: user.name.clone(),
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
        }
    }
}

/// User list page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersIndexTemplate {
    pub users: Vec<UserRow>,
    pub flash: Option<Flash>,
}

/// User edit page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/edit.html")]
pub struct UserEditTemplate {
    pub user: UserRow,
    pub error: Option<String>,
}

/// Force-change password page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/password.html")]
pub struct UserPasswordTemplate {
    pub user: UserRow,
    pub error: Option<String>,
}

/// Load a user or 404.
async fn load_user(state: &AppState, id: i32) -> Result<UserAccount> {
    UserAdminRepository::new(state.pool())
        .get(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no user {id}")))
}

/// List all user accounts.
#[instrument(skip(state, _admin, session))]
pub async fn index(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    session: Session,
) -> Result<UsersIndexTemplate> {
    let users = UserAdminRepository::new(state.pool()).list().await?;

    let flash = session::take_flash(&session).await;

    Ok(UsersIndexTemplate {
        users: users.iter().map(UserRow::from).collect(),
        flash,
    })
}

/// Display the user edit form.
#[instrument(skip(state, _admin))]
pub async fn edit_page(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    Path(id): Path<i32>,
) -> Result<UserEditTemplate> {
    let user = load_user(&state, id).await?;

    Ok(UserEditTemplate {
        user: UserRow::from(&user),
        error: None,
    })
}

/// Apply a user edit.
#[instrument(skip(state, _admin, session, form))]
pub async fn edit(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<UserEditForm>,
) -> Result<Response> {
    let user = load_user(&state, id).await?;

    let Ok(email) = Email::parse(&form.email) else {
        let page = UserEditTemplate {
            user: UserRow::from(&user),
            error: Some("Please enter a valid email address.".to_owned()),
        };
        return Ok(page.into_response());
    };

    let name = form.name.trim();
    if name.is_empty() {
        let page = UserEditTemplate {
            user: UserRow::from(&user),
            error: Some("Name is required.".to_owned()),
        };
        return Ok(page.into_response());
    }

    UserAdminRepository::new(state.pool())
        .update(
            user.id,
            &email,
            name,
            form.is_staff.is_some(),
            form.is_superuser.is_some(),
        )
        .await?;

    session::push_flash(
        &session,
        Flash::success(format!("User '{name}' updated successfully.")),
    )
    .await;
    Ok(Redirect::to("/dashboard/users").into_response())
}

/// Delete a user account.
#[instrument(skip(state, admin, session))]
pub async fn delete(
    State(state): State<AppState>,
    RequireSuperuser(admin): RequireSuperuser,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    if admin.id.as_i32() == id {
        return Err(AppError::Validation(
            "you cannot delete your own account".to_owned(),
        ));
    }

    let user = load_user(&state, id).await?;

    UserAdminRepository::new(state.pool()).delete(user.id).await?;

    tracing::info!(target_id = %user.id, "User deleted");
    session::push_flash(
        &session,
        Flash::success(format!("User '{}' deleted successfully.", user.name)),
    )
    .await;
    Ok(Redirect::to("/dashboard/users"))
}

/// Display the force-change password form.
#[instrument(skip(state, _admin))]
pub async fn password_page(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    Path(id): Path<i32>,
) -> Result<UserPasswordTemplate> {
    let user = load_user(&state, id).await?;

    Ok(UserPasswordTemplate {
        user: UserRow::from(&user),
        error: None,
    })
}

/// Force-change a user's password.
///
/// The target's existing sessions die on their next request via the
/// session-epoch bump; nobody else is logged out.
#[instrument(skip(state, _admin, session, form))]
pub async fn change_password(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<PasswordForm>,
) -> Result<Response> {
    let user = load_user(&state, id).await?;

    if let Err(e) = auth::validate_password(&form.password) {
        let page = UserPasswordTemplate {
            user: UserRow::from(&user),
            error: Some(format!("{e}.")),
        };
        return Ok(page.into_response());
    }

    let hash = auth::hash_password(&form.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    UserAdminRepository::new(state.pool())
        .set_password(user.id, &hash)
        .await?;

    tracing::info!(target_id = %user.id, "Password force-changed");
    session::push_flash(
        &session,
        Flash::success(format!("Password for '{}' changed successfully.", user.name)),
    )
    .await;
    Ok(Redirect::to("/dashboard/users").into_response())
}
