//! Checkout wizard state
//!
//! The four-step finalization sequence over a booking draft:
//! Review → Add-ons → Details → Payment. Steps are strictly ordered with
//! no skipping; forward movement out of Details is gated by validation,
//! backward movement never is.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::models::{BookingDraft, ContactDetails, Venue};

/// The ordered wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    Review,
    Addons,
    Details,
    Payment,
}

impl CheckoutStep {
    /// The following step, or `None` at Payment (finalization is its own
    /// transition, not a step)
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Review => Some(CheckoutStep::Addons),
            CheckoutStep::Addons => Some(CheckoutStep::Details),
            CheckoutStep::Details => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => None,
        }
    }

    /// The preceding step, or `None` at Review
    pub fn prev(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Review => None,
            CheckoutStep::Addons => Some(CheckoutStep::Review),
            CheckoutStep::Details => Some(CheckoutStep::Addons),
            CheckoutStep::Payment => Some(CheckoutStep::Details),
        }
    }

    /// One-based position for progress display
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Review => 1,
            CheckoutStep::Addons => 2,
            CheckoutStep::Details => 3,
            CheckoutStep::Payment => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CheckoutStep::Review => "Review Booking",
            CheckoutStep::Addons => "Add-ons",
            CheckoutStep::Details => "Details",
            CheckoutStep::Payment => "Payment",
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Live state of an entered wizard
#[derive(Debug, Clone)]
pub struct Checkout {
    pub step: CheckoutStep,
    pub contact: ContactDetails,
    pub terms_accepted: bool,
}

impl Checkout {
    /// Fresh wizard at Review, optionally pre-filled from the session user
    pub fn new(prefill: Option<ContactDetails>) -> Self {
        Self {
            step: CheckoutStep::Review,
            contact: prefill.unwrap_or_default(),
            terms_accepted: false,
        }
    }

    /// Validate the Details → Payment gate for the given draft and venue.
    ///
    /// Checks contact fields and terms first, then draft completeness and
    /// the capacity bound. The first failing field is reported.
    pub fn validate_details(&self, draft: &BookingDraft, venue: &Venue) -> Result<()> {
        if self.contact.name.trim().is_empty() {
            return Err(Error::validation("name", "Contact name is required"));
        }
        if !email_is_valid(&self.contact.email) {
            return Err(Error::validation("email", "A valid email address is required"));
        }
        if self.contact.phone.trim().is_empty() {
            return Err(Error::validation("phone", "Phone number is required"));
        }
        if !self.terms_accepted {
            return Err(Error::validation(
                "terms",
                "The terms and conditions must be accepted",
            ));
        }

        let experience = draft
            .experience
            .ok_or_else(|| Error::validation("experience", "An experience must be selected"))?;
        if !venue.supports(experience) {
            return Err(Error::validation(
                "experience",
                format!("{} is not offered at {}", experience, venue.name),
            ));
        }
        if draft.date.is_none() {
            return Err(Error::validation("date", "A date must be selected"));
        }
        if draft.time.is_none() {
            return Err(Error::validation("time", "A time slot must be selected"));
        }

        let guests = draft.guests.unwrap_or(1);
        if guests == 0 {
            return Err(Error::validation("guests", "At least one guest is required"));
        }
        if guests > venue.capacity {
            return Err(Error::validation(
                "guests",
                format!("{} holds at most {} guests", venue.name, venue.capacity),
            ));
        }

        Ok(())
    }
}

/// Recompute the booking total from scratch.
///
/// `base_price × guests + selected addon prices`; guests defaults to 1
/// when unset, unknown addon ids contribute nothing.
pub fn compute_total(venue: &Venue, draft: &BookingDraft, catalog: &Catalog) -> u32 {
    let guests = draft.guests.unwrap_or(1);
    let base = venue.base_price_gbp * guests;
    let addons: u32 = draft
        .addons
        .iter()
        .filter_map(|id| catalog.addon(id))
        .map(|a| a.price_gbp)
        .sum();
    base + addons
}

/// The exact acceptance rule for contact emails: at least one
/// non-whitespace character before the `@`, and a `.` somewhere after it.
pub fn email_is_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            local.chars().any(|c| !c.is_whitespace()) && domain.contains('.')
        }
        None => false,
    }
}
