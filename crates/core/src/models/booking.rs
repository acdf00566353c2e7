//! Booking models - the in-progress draft and the finalized record

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Experience;

/// The in-progress, not-yet-finalized booking record.
///
/// Every field is independently optional; consistency between fields is
/// only checked by the checkout wizard at transition time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub venue_id: Option<String>,
    pub experience: Option<Experience>,
    pub date: Option<NaiveDate>,
    /// Time slot in "HH:MM" form, as listed by the catalog
    pub time: Option<String>,
    pub guests: Option<u32>,
    /// Selected addon ids, unique, in selection order
    pub addons: Vec<String>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a patch into the draft, last write wins per field
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(venue_id) = patch.venue_id {
            self.venue_id = Some(venue_id);
        }
        if let Some(experience) = patch.experience {
            self.experience = Some(experience);
        }
        if let Some(date) = patch.date {
            self.date = Some(date);
        }
        if let Some(time) = patch.time {
            self.time = Some(time);
        }
        if let Some(guests) = patch.guests {
            self.guests = Some(guests);
        }
    }

    /// Toggle an addon selection; selecting a selected addon deselects it
    pub fn toggle_addon(&mut self, addon_id: &str) {
        if let Some(pos) = self.addons.iter().position(|id| id == addon_id) {
            self.addons.remove(pos);
        } else {
            self.addons.push(addon_id.to_string());
        }
    }
}

/// A partial update to a [`BookingDraft`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub venue_id: Option<String>,
    pub experience: Option<Experience>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub guests: Option<u32>,
}

impl DraftPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_venue(mut self, venue_id: impl Into<String>) -> Self {
        self.venue_id = Some(venue_id.into());
        self
    }

    pub fn with_experience(mut self, experience: Experience) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = Some(guests);
        self
    }
}

/// Contact details collected at the wizard's Details step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A finalized booking, immutable apart from status transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedBooking {
    pub id: Uuid,
    /// Owning user, if the session was authenticated at finalization
    pub user_id: Option<Uuid>,
    pub venue_id: String,
    pub experience: Experience,
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    pub addons: Vec<String>,
    pub total_gbp: u32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking lifecycle status, driven externally after finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
}

impl BookingStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
