//! Completed booking storage
//!
//! The store is the wizard's persistence collaborator. The trait keeps it
//! swappable; the only implementation here is in-memory, and nothing
//! survives a restart.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{BookingStatus, CompletedBooking, Experience};

/// Repository of finalized bookings
pub trait BookingStore {
    /// Append a finalized booking
    fn add(&mut self, booking: CompletedBooking) -> Result<()>;

    /// Find a booking by id
    fn find_by_id(&self, id: Uuid) -> Option<&CompletedBooking>;

    /// All bookings, oldest first
    fn list_all(&self) -> &[CompletedBooking];

    /// Bookings owned by a user, oldest first
    fn list_for_user(&self, user_id: Uuid) -> Vec<&CompletedBooking>;

    /// Externally driven status transition
    fn update_status(&mut self, id: Uuid, status: BookingStatus) -> Result<()>;
}

/// In-memory booking store
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: Vec<CompletedBooking>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo booking, owned by `user_id`
    pub fn with_seed_booking(user_id: Uuid) -> Self {
        let mut store = Self::new();
        store.bookings.push(CompletedBooking {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            venue_id: "abandoned-mill".into(),
            experience: Experience::Vr,
            date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap_or_default(),
            time: "19:00".into(),
            guests: 4,
            addons: vec!["snacks".into(), "extra-vr".into()],
            total_gbp: 160,
            status: BookingStatus::Confirmed,
            created_at: Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
        });
        store
    }
}

impl BookingStore for InMemoryBookingStore {
    fn add(&mut self, booking: CompletedBooking) -> Result<()> {
        if self.bookings.iter().any(|b| b.id == booking.id) {
            return Err(Error::InvalidOperation(format!(
                "Booking {} already exists",
                booking.id
            )));
        }
        self.bookings.push(booking);
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Option<&CompletedBooking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    fn list_all(&self) -> &[CompletedBooking] {
        &self.bookings
    }

    fn list_for_user(&self, user_id: Uuid) -> Vec<&CompletedBooking> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == Some(user_id))
            .collect()
    }

    fn update_status(&mut self, id: Uuid, status: BookingStatus) -> Result<()> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::NotFound(format!("Booking {id}")))?;

        tracing::info!(booking_id = %id, from = %booking.status, to = %status, "Booking status changed");
        booking.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking(user_id: Option<Uuid>) -> CompletedBooking {
        CompletedBooking {
            id: Uuid::new_v4(),
            user_id,
            venue_id: "old-cinema".into(),
            experience: Experience::Cinema,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: "20:00".into(),
            guests: 2,
            addons: Vec::new(),
            total_gbp: 84,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_and_find() {
        let mut store = InMemoryBookingStore::new();
        let booking = sample_booking(None);
        let id = booking.id;
        store.add(booking).unwrap();

        assert_eq!(store.find_by_id(id).unwrap().total_gbp, 84);
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = InMemoryBookingStore::new();
        let booking = sample_booking(None);
        store.add(booking.clone()).unwrap();
        assert!(store.add(booking).is_err());
    }

    #[test]
    fn test_list_for_user_filters_owner() {
        let user_id = Uuid::new_v4();
        let mut store = InMemoryBookingStore::with_seed_booking(user_id);
        store.add(sample_booking(None)).unwrap();
        store.add(sample_booking(Some(user_id))).unwrap();

        assert_eq!(store.list_all().len(), 3);
        assert_eq!(store.list_for_user(user_id).len(), 2);
    }

    #[test]
    fn test_status_transition() {
        let mut store = InMemoryBookingStore::new();
        let booking = sample_booking(None);
        let id = booking.id;
        store.add(booking).unwrap();

        store.update_status(id, BookingStatus::Completed).unwrap();
        assert_eq!(store.find_by_id(id).unwrap().status, BookingStatus::Completed);

        assert!(store.update_status(Uuid::new_v4(), BookingStatus::Pending).is_err());
    }
}
