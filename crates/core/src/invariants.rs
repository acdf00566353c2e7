//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::BookingDraft;

/// Validate that a catalog is internally consistent
pub fn assert_catalog_invariants(catalog: &Catalog) {
    let mut city_ids = HashSet::new();
    for city in catalog.cities() {
        debug_assert!(
            city_ids.insert(city.id.as_str()),
            "Duplicate city id {}",
            city.id
        );

        let mut town_ids = HashSet::new();
        for town in &city.towns {
            debug_assert!(
                town_ids.insert(town.id.as_str()),
                "Duplicate town id {} in city {}",
                town.id,
                city.id
            );

            let mut venue_ids = HashSet::new();
            for venue in &town.venues {
                debug_assert!(
                    venue_ids.insert(venue.id.as_str()),
                    "Duplicate venue id {} in town {}",
                    venue.id,
                    town.id
                );
                debug_assert!(venue.capacity > 0, "Venue {} has zero capacity", venue.id);
                debug_assert!(
                    !venue.experiences.is_empty(),
                    "Venue {} supports no experiences",
                    venue.id
                );
            }
        }
    }

    let mut addon_ids = HashSet::new();
    for addon in catalog.addons() {
        debug_assert!(
            addon_ids.insert(addon.id.as_str()),
            "Duplicate addon id {}",
            addon.id
        );
    }
}

/// Validate that a draft's addon selection holds no duplicates
pub fn assert_draft_invariants(draft: &BookingDraft) {
    let unique: HashSet<&str> = draft.addons.iter().map(String::as_str).collect();
    debug_assert!(
        unique.len() == draft.addons.len(),
        "Draft addon selection contains duplicates: {:?}",
        draft.addons
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn test_seed_catalog_passes_invariants() {
        assert_catalog_invariants(&seed());
    }

    #[test]
    fn test_clean_draft_passes_invariants() {
        let mut draft = BookingDraft::new();
        draft.toggle_addon("snacks");
        draft.toggle_addon("photo-package");
        assert_draft_invariants(&draft);
    }
}
