//! Core types for Taffreen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod sort;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use sort::ProductSort;
pub use status::OrderStatus;
