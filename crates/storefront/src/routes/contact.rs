//! Contact form route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::ContactRepository;
use crate::error::Result;
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/show.html")]
pub struct ContactTemplate {
    pub error: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact success page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/success.html")]
pub struct ContactSuccessTemplate;

/// Display the contact form.
#[instrument(skip_all)]
pub async fn show() -> ContactTemplate {
    ContactTemplate {
        error: None,
        name: String::new(),
        email: String::new(),
        message: String::new(),
    }
}

/// Log a contact form submission.
///
/// No authentication required; blank fields re-render the form inline.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        let page = ContactTemplate {
            error: Some("All fields are required.".to_owned()),
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        };
        return Ok(page.into_response());
    }

    ContactRepository::new(state.pool())
        .create(name, email, message)
        .await?;

    Ok(Redirect::to("/contact/success").into_response())
}

/// Display the contact success page.
#[instrument(skip_all)]
pub async fn success() -> ContactSuccessTemplate {
    ContactSuccessTemplate
}
