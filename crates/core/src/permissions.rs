//! Admin permission model.
//!
//! The dashboard is gated by two role flags carried on the user record:
//! `is_staff` and `is_superuser`. Rather than scattering ad-hoc flag checks
//! through the handlers, every authorization decision goes through
//! [`is_allowed`] with an explicit [`AdminAction`].

use serde::{Deserialize, Serialize};

/// An action a dashboard user may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminAction {
    /// View the dashboard overview and entity counts.
    ViewDashboard,
    /// View the product list.
    ListProducts,
    /// Create, edit, or delete products.
    ManageProducts,
    /// List, edit, or delete user accounts, or force-change a password.
    ManageUsers,
}

/// Whether a user with the given role flags may perform `action`.
///
/// Staff may view; only superusers may mutate users or products. A
/// superuser is implicitly allowed everything staff can do.
#[must_use]
pub const fn is_allowed(is_staff: bool, is_superuser: bool, action: AdminAction) -> bool {
    match action {
        AdminAction::ViewDashboard | AdminAction::ListProducts => is_staff || is_superuser,
        AdminAction::ManageProducts | AdminAction::ManageUsers => is_superuser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_can_view_but_not_mutate() {
        assert!(is_allowed(true, false, AdminAction::ViewDashboard));
        assert!(is_allowed(true, false, AdminAction::ListProducts));
        assert!(!is_allowed(true, false, AdminAction::ManageProducts));
        assert!(!is_allowed(true, false, AdminAction::ManageUsers));
    }

    #[test]
    fn test_superuser_can_do_everything() {
        for action in [
            AdminAction::ViewDashboard,
            AdminAction::ListProducts,
            AdminAction::ManageProducts,
            AdminAction::ManageUsers,
        ] {
            assert!(is_allowed(false, true, action));
            assert!(is_allowed(true, true, action));
        }
    }

    #[test]
    fn test_regular_user_is_denied() {
        for action in [
            AdminAction::ViewDashboard,
            AdminAction::ListProducts,
            AdminAction::ManageProducts,
            AdminAction::ManageUsers,
        ] {
            assert!(!is_allowed(false, false, action));
        }
    }
}
