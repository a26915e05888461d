//! Request middleware: sessions and role-gated authentication extractors.

pub mod auth;
pub mod session;

pub use auth::{RequireStaff, RequireSuperuser};
pub use session::create_session_layer;
