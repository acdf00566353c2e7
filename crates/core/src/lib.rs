//! Faded Steps Core Library
//!
//! Domain core for the Faded Steps horror venue booking site: the venue
//! catalog, the mock session identity, the booking draft store, and the
//! checkout wizard that turns a draft into a completed booking.
//!
//! Everything is in-memory, synchronous, and single-threaded; the UI,
//! routing, and any real payment or persistence live outside this crate.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod error;
pub mod invariants;
pub mod models;

pub use auth::{Identity, ADMIN_INVITE_CODE};
pub use booking::{
    compute_total, BookingSession, BookingStore, CheckoutStep, DraftStore, InMemoryBookingStore,
    StepAdvance, StepRetreat,
};
pub use catalog::{seed, Catalog};
pub use error::{Error, Result};
pub use models::*;
