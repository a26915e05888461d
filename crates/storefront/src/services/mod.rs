//! Service layer: business logic between routes and repositories.

pub mod auth;
