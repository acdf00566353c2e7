//! Venue catalog - read-only lookup over the City → Town → Venue hierarchy
//!
//! The catalog is built once at startup (from the bundled seed or a TOML
//! document) and never mutated afterwards. Lookups are case-sensitive
//! exact matches on identifier path segments; a miss at any segment is
//! simply `None`, never a panic.

mod seed;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Addon, City, Town, Venue};

pub use seed::seed;

/// The static catalog: cities, globally available add-ons, and the
/// bookable time slots in "HH:MM" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    cities: Vec<City>,
    addons: Vec<Addon>,
    time_slots: Vec<String>,
}

impl Catalog {
    pub fn new(cities: Vec<City>, addons: Vec<Addon>, time_slots: Vec<String>) -> Self {
        let catalog = Self {
            cities,
            addons,
            time_slots,
        };
        crate::invariants::assert_catalog_invariants(&catalog);
        catalog
    }

    /// Load a catalog from a TOML document
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let catalog: Catalog = toml::from_str(&text)?;
        crate::invariants::assert_catalog_invariants(&catalog);
        tracing::info!(
            path = %path.display(),
            cities = catalog.cities.len(),
            "Loaded catalog document"
        );
        Ok(catalog)
    }

    /// Resolve a city by id
    pub fn city(&self, city_id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id == city_id)
    }

    /// Resolve a town scoped to a city
    pub fn town(&self, city_id: &str, town_id: &str) -> Option<&Town> {
        self.city(city_id)?.towns.iter().find(|t| t.id == town_id)
    }

    /// Resolve a venue scoped to a (city, town) path
    pub fn venue(&self, city_id: &str, town_id: &str, venue_id: &str) -> Option<&Venue> {
        self.town(city_id, town_id)?
            .venues
            .iter()
            .find(|v| v.id == venue_id)
    }

    /// Find a venue by id alone, searching every town
    pub fn find_venue(&self, venue_id: &str) -> Option<&Venue> {
        self.cities
            .iter()
            .flat_map(|c| &c.towns)
            .flat_map(|t| &t.venues)
            .find(|v| v.id == venue_id)
    }

    /// Locate the (city, town) pair a venue belongs to
    pub fn venue_location(&self, venue_id: &str) -> Option<(&City, &Town)> {
        for city in &self.cities {
            for town in &city.towns {
                if town.venues.iter().any(|v| v.id == venue_id) {
                    return Some((city, town));
                }
            }
        }
        None
    }

    pub fn addon(&self, addon_id: &str) -> Option<&Addon> {
        self.addons.iter().find(|a| a.id == addon_id)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    /// Total venue count across all towns
    pub fn venue_count(&self) -> usize {
        self.cities
            .iter()
            .flat_map(|c| &c.towns)
            .map(|t| t.venues.len())
            .sum()
    }
}
