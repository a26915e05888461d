//! Service layer for the admin dashboard.

pub mod auth;
