//! Derived dashboard views over the booking store
//!
//! Recomputed on demand; nothing here is cached or stored.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::{BookingStatus, CompletedBooking};

use super::store::BookingStore;

/// A customer's bookings split into upcoming and past
#[derive(Debug)]
pub struct CustomerBookings<'a> {
    pub upcoming: Vec<&'a CompletedBooking>,
    pub past: Vec<&'a CompletedBooking>,
}

/// Split a user's bookings around `today`.
///
/// Upcoming means dated strictly after today and not yet COMPLETED;
/// everything else is past.
pub fn customer_bookings<'a>(
    store: &'a dyn BookingStore,
    user_id: Uuid,
    today: NaiveDate,
) -> CustomerBookings<'a> {
    let mine = store.list_for_user(user_id);
    let (upcoming, past) = mine
        .into_iter()
        .partition(|b| b.date > today && b.status != BookingStatus::Completed);
    CustomerBookings { upcoming, past }
}

/// Site-wide overview numbers for the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOverview {
    pub total_bookings: usize,
    pub total_revenue_gbp: u32,
    pub total_venues: usize,
    pub total_cities: usize,
}

pub fn admin_overview(store: &dyn BookingStore, catalog: &Catalog) -> AdminOverview {
    let bookings = store.list_all();
    AdminOverview {
        total_bookings: bookings.len(),
        total_revenue_gbp: bookings.iter().map(|b| b.total_gbp).sum(),
        total_venues: catalog.venue_count(),
        total_cities: catalog.cities().len(),
    }
}

/// The most recent bookings, newest first, at most `limit`
pub fn recent_bookings(store: &dyn BookingStore, limit: usize) -> Vec<&CompletedBooking> {
    let mut bookings: Vec<_> = store.list_all().iter().collect();
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    bookings.truncate(limit);
    bookings
}
