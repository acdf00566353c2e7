//! Session-scoped booking context
//!
//! One `BookingSession` exists per user session and is owned by the
//! caller; it carries the draft store and, while checkout is underway,
//! the wizard state. The catalog, booking store, and current user are
//! passed into each operation rather than held globally.

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::models::{
    BookingDraft, BookingStatus, CompletedBooking, ContactDetails, DraftPatch, User, Venue,
};

use super::draft::DraftStore;
use super::store::BookingStore;
use super::wizard::{compute_total, Checkout, CheckoutStep};

/// Where the caller lands after `advance_step`
#[derive(Debug)]
pub enum StepAdvance {
    /// Moved to the next step
    Moved(CheckoutStep),
    /// Advanced out of Payment: the booking is finalized and the wizard
    /// is gone
    Completed(CompletedBooking),
}

/// Where the caller lands after `go_back_step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRetreat {
    /// Moved to the previous step, selections intact
    Moved(CheckoutStep),
    /// Already at Review; the wizard wants to exit. Nothing is discarded
    /// until the caller confirms by calling `abandon`.
    ExitRequested,
}

/// Per-session booking state: the draft plus any active checkout wizard
#[derive(Debug, Default)]
pub struct BookingSession {
    drafts: DraftStore,
    checkout: Option<Checkout>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a venue's booking widget: create (or retarget) the draft.
    ///
    /// The venue must exist in the catalog.
    pub fn start_booking<'a>(
        &mut self,
        catalog: &'a Catalog,
        venue_id: &str,
    ) -> Result<&'a Venue> {
        let venue = catalog
            .find_venue(venue_id)
            .ok_or_else(|| Error::NotFound(format!("Venue {venue_id}")))?;

        self.drafts
            .set_fields(DraftPatch::new().with_venue(venue_id));
        tracing::debug!(venue_id, "Booking draft started");
        Ok(venue)
    }

    /// Merge fields into the draft; no cross-field validation here
    pub fn set_draft_fields(&mut self, patch: DraftPatch) {
        self.drafts.set_fields(patch);
        if let Some(draft) = self.drafts.get() {
            crate::invariants::assert_draft_invariants(draft);
        }
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        self.drafts.get()
    }

    /// Discard the draft unconditionally; idempotent
    pub fn clear_draft(&mut self) {
        self.drafts.clear();
    }

    /// Toggle a catalog addon on the draft (idempotent per double toggle)
    pub fn toggle_addon(&mut self, catalog: &Catalog, addon_id: &str) -> Result<()> {
        if catalog.addon(addon_id).is_none() {
            return Err(Error::NotFound(format!("Addon {addon_id}")));
        }
        let draft = self
            .drafts
            .get_mut()
            .ok_or_else(|| Error::Precondition("No booking draft in progress".to_string()))?;
        draft.toggle_addon(addon_id);
        crate::invariants::assert_draft_invariants(draft);
        Ok(())
    }

    /// Enter the checkout wizard at Review.
    ///
    /// Requires a draft whose venue resolves in the catalog; otherwise the
    /// caller should redirect back to catalog browsing. Contact details
    /// are pre-filled from the session user. Re-entering restarts at
    /// Review without touching the draft.
    pub fn begin_checkout(&mut self, catalog: &Catalog, user: Option<&User>) -> Result<CheckoutStep> {
        let venue = self.resolve_draft_venue(catalog)?;
        tracing::debug!(venue_id = %venue.id, "Checkout started");

        let prefill = user.map(|u| ContactDetails {
            name: u.name.clone(),
            email: u.email.clone(),
            phone: String::new(),
        });
        let checkout = Checkout::new(prefill);
        let step = checkout.step;
        self.checkout = Some(checkout);
        Ok(step)
    }

    /// The wizard's current step, if checkout is underway
    pub fn checkout_step(&self) -> Option<CheckoutStep> {
        self.checkout.as_ref().map(|c| c.step)
    }

    /// Replace the contact details collected at the Details step
    pub fn set_contact_details(&mut self, contact: ContactDetails) -> Result<()> {
        self.active_checkout_mut()?.contact = contact;
        Ok(())
    }

    /// Record the terms-acceptance flag
    pub fn set_terms_accepted(&mut self, accepted: bool) -> Result<()> {
        self.active_checkout_mut()?.terms_accepted = accepted;
        Ok(())
    }

    /// Attempt a forward transition.
    ///
    /// Review and Add-ons advance unconditionally; Details validates the
    /// contact fields and draft completeness and stays put on failure;
    /// Payment finalizes the booking.
    pub fn advance_step(
        &mut self,
        catalog: &Catalog,
        store: &mut dyn BookingStore,
        user: Option<&User>,
    ) -> Result<StepAdvance> {
        let step = self.active_checkout_mut()?.step;
        match step {
            CheckoutStep::Review | CheckoutStep::Addons => {
                let next = step.next().unwrap_or(step);
                self.active_checkout_mut()?.step = next;
                Ok(StepAdvance::Moved(next))
            }
            CheckoutStep::Details => {
                let venue = self.resolve_draft_venue(catalog)?;
                let draft = self
                    .drafts
                    .get()
                    .ok_or_else(|| Error::Precondition("No booking draft in progress".to_string()))?;
                let checkout = self
                    .checkout
                    .as_ref()
                    .ok_or_else(|| Error::Precondition("Checkout not started".to_string()))?;

                checkout.validate_details(draft, venue)?;
                self.active_checkout_mut()?.step = CheckoutStep::Payment;
                Ok(StepAdvance::Moved(CheckoutStep::Payment))
            }
            CheckoutStep::Payment => {
                let booking = self.finalize(catalog, store, user)?;
                Ok(StepAdvance::Completed(booking))
            }
        }
    }

    /// Step back one screen; never validated, never loses selections.
    /// At Review the wizard only signals that it wants to exit.
    pub fn go_back_step(&mut self) -> Result<StepRetreat> {
        let checkout = self.active_checkout_mut()?;
        match checkout.step.prev() {
            Some(prev) => {
                checkout.step = prev;
                Ok(StepRetreat::Moved(prev))
            }
            None => Ok(StepRetreat::ExitRequested),
        }
    }

    /// Abandon the wizard and discard the draft; idempotent
    pub fn abandon(&mut self) {
        if self.checkout.take().is_some() || self.drafts.get().is_some() {
            tracing::debug!("Booking abandoned");
        }
        self.drafts.clear();
    }

    /// Recompute the running total; requires a draft with a known venue
    pub fn current_total(&self, catalog: &Catalog) -> Result<u32> {
        let venue = self.resolve_draft_venue(catalog)?;
        let draft = self
            .drafts
            .get()
            .ok_or_else(|| Error::Precondition("No booking draft in progress".to_string()))?;
        Ok(compute_total(venue, draft, catalog))
    }

    /// The Payment → Complete transition: assemble and store the
    /// finalized booking, then dissolve the wizard and the draft.
    /// Rejected unless the wizard has reached Payment.
    pub fn complete_booking(
        &mut self,
        catalog: &Catalog,
        store: &mut dyn BookingStore,
        user: Option<&User>,
    ) -> Result<CompletedBooking> {
        let step = self.active_checkout_mut()?.step;
        if step != CheckoutStep::Payment {
            return Err(Error::InvalidOperation(format!(
                "Cannot complete booking from the {step} step"
            )));
        }
        self.finalize(catalog, store, user)
    }

    fn finalize(
        &mut self,
        catalog: &Catalog,
        store: &mut dyn BookingStore,
        user: Option<&User>,
    ) -> Result<CompletedBooking> {
        let venue = self.resolve_draft_venue(catalog)?;
        let draft = self
            .drafts
            .get()
            .ok_or_else(|| Error::Precondition("No booking draft in progress".to_string()))?;

        // The Details gate guarantees these; a caller cannot reach Payment
        // without passing it.
        let experience = draft
            .experience
            .ok_or_else(|| Error::Precondition("Draft has no experience".to_string()))?;
        let date = draft
            .date
            .ok_or_else(|| Error::Precondition("Draft has no date".to_string()))?;
        let time = draft
            .time
            .clone()
            .ok_or_else(|| Error::Precondition("Draft has no time slot".to_string()))?;

        let booking = CompletedBooking {
            id: Uuid::new_v4(),
            user_id: user.map(|u| u.id),
            venue_id: venue.id.clone(),
            experience,
            date,
            time,
            guests: draft.guests.unwrap_or(1),
            addons: draft.addons.clone(),
            total_gbp: compute_total(venue, draft, catalog),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        store.add(booking.clone())?;
        self.drafts.clear();
        self.checkout = None;

        tracing::info!(
            booking_id = %booking.id,
            venue_id = %booking.venue_id,
            guests = booking.guests,
            total_gbp = booking.total_gbp,
            "Booking completed"
        );
        Ok(booking)
    }

    fn resolve_draft_venue<'a>(&self, catalog: &'a Catalog) -> Result<&'a Venue> {
        let venue_id = self
            .drafts
            .get()
            .and_then(|d| d.venue_id.as_deref())
            .ok_or_else(|| Error::Precondition("No venue selected for booking".to_string()))?;
        catalog
            .find_venue(venue_id)
            .ok_or_else(|| Error::Precondition(format!("Venue {venue_id} no longer exists")))
    }

    fn active_checkout_mut(&mut self) -> Result<&mut Checkout> {
        self.checkout
            .as_mut()
            .ok_or_else(|| Error::Precondition("Checkout not started".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::store::InMemoryBookingStore;
    use crate::catalog::seed;
    use crate::models::{Experience, UserRole};

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "07700 900000".into(),
        }
    }

    fn session_at_review(catalog: &Catalog) -> BookingSession {
        let mut session = BookingSession::new();
        session.start_booking(catalog, "abandoned-mill").unwrap();
        session.set_draft_fields(
            DraftPatch::new()
                .with_experience(Experience::Vr)
                .with_date("2025-02-15".parse().unwrap())
                .with_time("19:00")
                .with_guests(4),
        );
        session.begin_checkout(catalog, None).unwrap();
        session
    }

    fn advance_to_payment(
        session: &mut BookingSession,
        catalog: &Catalog,
        store: &mut InMemoryBookingStore,
    ) {
        session.advance_step(catalog, store, None).unwrap(); // -> Addons
        session.advance_step(catalog, store, None).unwrap(); // -> Details
        session.set_contact_details(contact()).unwrap();
        session.set_terms_accepted(true).unwrap();
        session.advance_step(catalog, store, None).unwrap(); // -> Payment
    }

    #[test]
    fn test_start_booking_unknown_venue() {
        let catalog = seed();
        let mut session = BookingSession::new();
        assert!(matches!(
            session.start_booking(&catalog, "crypt-of-lies"),
            Err(Error::NotFound(_))
        ));
        assert!(session.draft().is_none());
    }

    #[test]
    fn test_checkout_requires_draft_with_venue() {
        let catalog = seed();
        let mut session = BookingSession::new();
        assert!(matches!(
            session.begin_checkout(&catalog, None),
            Err(Error::Precondition(_))
        ));

        session.set_draft_fields(DraftPatch::new().with_guests(2));
        assert!(session.begin_checkout(&catalog, None).is_err());
    }

    #[test]
    fn test_contact_prefill_from_session_user() {
        let catalog = seed();
        let user = User::new("John Doe".into(), "john@example.com".into(), UserRole::Customer);

        let mut session = BookingSession::new();
        session.start_booking(&catalog, "abandoned-mill").unwrap();
        session.begin_checkout(&catalog, Some(&user)).unwrap();

        // Prefill is visible once the wizard validates: name/email pass,
        // phone is still required.
        session.set_draft_fields(
            DraftPatch::new()
                .with_experience(Experience::Vr)
                .with_date("2025-02-15".parse().unwrap())
                .with_time("19:00"),
        );
        let mut store = InMemoryBookingStore::new();
        session.advance_step(&catalog, &mut store, None).unwrap();
        session.advance_step(&catalog, &mut store, None).unwrap();
        session.set_terms_accepted(true).unwrap();

        let err = session.advance_step(&catalog, &mut store, None).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "phone"));
    }

    #[test]
    fn test_happy_path_to_completion() {
        let catalog = seed();
        let user = User::new("John Doe".into(), "john@example.com".into(), UserRole::Customer);
        let mut store = InMemoryBookingStore::new();
        let mut session = session_at_review(&catalog);

        advance_to_payment(&mut session, &catalog, &mut store);
        assert_eq!(session.checkout_step(), Some(CheckoutStep::Payment));

        session.toggle_addon(&catalog, "snacks").unwrap();
        session.toggle_addon(&catalog, "extra-vr").unwrap();
        let total = session.current_total(&catalog).unwrap();
        assert_eq!(total, 163);

        let booking = session
            .complete_booking(&catalog, &mut store, Some(&user))
            .unwrap();
        assert_eq!(booking.total_gbp, total);
        assert_eq!(booking.user_id, Some(user.id));
        assert_eq!(booking.status, BookingStatus::Confirmed);

        assert!(session.draft().is_none());
        assert!(session.checkout_step().is_none());
        assert_eq!(store.list_all().len(), 1);
        assert_eq!(store.list_all()[0].total_gbp, 163);
    }

    #[test]
    fn test_advance_out_of_payment_also_finalizes() {
        let catalog = seed();
        let mut store = InMemoryBookingStore::new();
        let mut session = session_at_review(&catalog);
        advance_to_payment(&mut session, &catalog, &mut store);

        let outcome = session.advance_step(&catalog, &mut store, None).unwrap();
        assert!(matches!(outcome, StepAdvance::Completed(_)));
        assert!(session.draft().is_none());
    }

    #[test]
    fn test_complete_rejected_before_payment() {
        let catalog = seed();
        let mut store = InMemoryBookingStore::new();
        let mut session = session_at_review(&catalog);

        for _ in 0..3 {
            let result = session.complete_booking(&catalog, &mut store, None);
            assert!(matches!(result, Err(Error::InvalidOperation(_))));
            let _ = session.advance_step(&catalog, &mut store, None);
            if session.checkout_step() == Some(CheckoutStep::Details) {
                session.set_contact_details(contact()).unwrap();
                session.set_terms_accepted(true).unwrap();
            }
        }
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_details_failure_retains_step_and_data() {
        let catalog = seed();
        let mut store = InMemoryBookingStore::new();
        let mut session = session_at_review(&catalog);

        session.advance_step(&catalog, &mut store, None).unwrap();
        session.toggle_addon(&catalog, "photo-package").unwrap();
        session.advance_step(&catalog, &mut store, None).unwrap();

        // Terms never accepted
        session.set_contact_details(contact()).unwrap();
        let err = session.advance_step(&catalog, &mut store, None).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "terms"));
        assert_eq!(session.checkout_step(), Some(CheckoutStep::Details));
        assert_eq!(session.draft().unwrap().addons, vec!["photo-package"]);
    }

    #[test]
    fn test_back_never_loses_selections() {
        let catalog = seed();
        let mut store = InMemoryBookingStore::new();
        let mut session = session_at_review(&catalog);

        session.advance_step(&catalog, &mut store, None).unwrap();
        session.toggle_addon(&catalog, "snacks").unwrap();

        assert_eq!(
            session.go_back_step().unwrap(),
            StepRetreat::Moved(CheckoutStep::Review)
        );
        assert_eq!(session.draft().unwrap().addons, vec!["snacks"]);

        // At Review, back only asks to exit; nothing is discarded yet
        assert_eq!(session.go_back_step().unwrap(), StepRetreat::ExitRequested);
        assert!(session.draft().is_some());
        assert_eq!(session.checkout_step(), Some(CheckoutStep::Review));

        session.abandon();
        assert!(session.draft().is_none());
        assert!(session.checkout_step().is_none());
    }

    #[test]
    fn test_abandon_is_idempotent() {
        let catalog = seed();
        let mut session = session_at_review(&catalog);
        session.abandon();
        session.abandon();
        assert!(session.draft().is_none());
    }

    #[test]
    fn test_toggle_unknown_addon() {
        let catalog = seed();
        let mut session = session_at_review(&catalog);
        assert!(matches!(
            session.toggle_addon(&catalog, "seance-kit"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_current_total_without_venue() {
        let catalog = seed();
        let session = BookingSession::new();
        assert!(matches!(
            session.current_total(&catalog),
            Err(Error::Precondition(_))
        ));
    }
}
