//! Role gating for protected surfaces
//!
//! Mirrors the site's protected routes: checkout needs any signed-in
//! user, the customer dashboard needs CUSTOMER, admin tools need ADMIN.

use crate::models::UserRole;

/// Gated surfaces of the booking site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Browsing the catalog - always open
    Locations,
    /// The checkout wizard
    Checkout,
    /// Customer booking dashboard
    CustomerDashboard,
    /// Admin overview and management
    AdminDashboard,
}

/// Check whether a (possibly anonymous) role may enter a surface
pub fn can_access(role: Option<UserRole>, surface: Surface) -> bool {
    match surface {
        Surface::Locations => true,
        Surface::Checkout => role.is_some(),
        Surface::CustomerDashboard => role == Some(UserRole::Customer),
        Surface::AdminDashboard => role == Some(UserRole::Admin),
    }
}
