//! Booking flow: draft accumulation, the checkout wizard, storage of
//! finalized bookings, and the dashboard views derived from them.

mod draft;
pub mod reports;
mod session;
mod store;
mod wizard;

pub use draft::DraftStore;
pub use session::{BookingSession, StepAdvance, StepRetreat};
pub use store::{BookingStore, InMemoryBookingStore};
pub use wizard::{compute_total, email_is_valid, Checkout, CheckoutStep};
