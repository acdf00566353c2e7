//! Catalog models - the City → Town → Venue hierarchy and add-ons

use serde::{Deserialize, Serialize};

/// A city with bookable towns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub towns: Vec<Town>,
}

/// A town within a city, holding its venues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Town {
    pub id: String,
    pub name: String,
    pub venues: Vec<Venue>,
}

/// A bookable horror venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Maximum party size, always > 0
    pub capacity: u32,
    /// Supported experience kinds, never empty
    pub experiences: Vec<Experience>,
    /// Per-guest price in whole pounds
    pub base_price_gbp: u32,
    pub description: String,
    pub safety_notes: String,
}

impl Venue {
    pub fn supports(&self, experience: Experience) -> bool {
        self.experiences.contains(&experience)
    }
}

/// The two experience kinds a venue can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Experience {
    /// Horror film screening
    Cinema,
    /// VR horror session
    Vr,
}

impl Experience {
    pub fn display_name(&self) -> &'static str {
        match self {
            Experience::Cinema => "Horror Cinema",
            Experience::Vr => "VR Experience",
        }
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An optional paid extra, available for any venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Addon {
    pub id: String,
    pub name: String,
    /// Price in whole pounds
    pub price_gbp: u32,
}
