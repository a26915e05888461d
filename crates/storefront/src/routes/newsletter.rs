//! Newsletter subscription route handler.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use taffreen_core::Email;

use crate::db::{RepositoryError, SubscriptionRepository};
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::models::session::{self, Flash};
use crate::routes::home::build_home;
use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: String,
}

/// Subscribe to the newsletter.
///
/// On success the browser is redirected home with a flash message. A
/// malformed or already-subscribed email re-renders the home page with an
/// inline form error - a duplicate is rejected, never silently ignored.
#[instrument(skip(state, user, session, form), fields(email = %form.email))]
pub async fn subscribe(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Form(form): Form<SubscribeForm>,
) -> Result<Response> {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(_) => {
            let page = build_home(
                &state,
                user.as_ref(),
                None,
                Some("Please enter a valid email address.".to_owned()),
                form.email,
            )
            .await?;
            return Ok(page.into_response());
        }
    };

    match SubscriptionRepository::new(state.pool()).create(&email).await {
        Ok(_) => {
            tracing::info!("Newsletter subscription recorded");
            session::push_flash(&session, Flash::success("Thanks for subscribing!")).await;
            Ok(Redirect::to("/").into_response())
        }
        Err(RepositoryError::Conflict(_)) => {
            let page = build_home(
                &state,
                user.as_ref(),
                None,
                Some("This email address is already subscribed.".to_owned()),
                email.into_inner(),
            )
            .await?;
            Ok(page.into_response())
        }
        Err(e) => Err(AppError::from(e)),
    }
}
