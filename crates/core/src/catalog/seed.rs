//! Built-in catalog seed
//!
//! The hand-authored venue data the site launches with. Kept in one place
//! so the TOML loader and the seed stay interchangeable.

use crate::models::{Addon, City, Experience, Town, Venue};

use super::Catalog;

/// Build the bundled catalog
pub fn seed() -> Catalog {
    let cities = vec![
        City {
            id: "birmingham".into(),
            name: "Birmingham".into(),
            towns: vec![
                Town {
                    id: "oldbury".into(),
                    name: "Oldbury".into(),
                    venues: vec![Venue {
                        id: "abandoned-mill".into(),
                        name: "Abandoned Textile Mill".into(),
                        address: "45 Mill Lane, Oldbury, B69 4PX".into(),
                        capacity: 12,
                        experiences: vec![Experience::Cinema, Experience::Vr],
                        base_price_gbp: 35,
                        description: "Experience terror in this genuinely haunted Victorian \
                            textile mill. With its crumbling machinery and ghostly whispers \
                            echoing through the halls, this venue offers an authentic \
                            supernatural encounter."
                            .into(),
                        safety_notes: "Uneven floors, low lighting conditions. Not suitable \
                            for those with mobility issues or claustrophobia."
                            .into(),
                    }],
                },
                Town {
                    id: "edgbaston".into(),
                    name: "Edgbaston".into(),
                    venues: vec![Venue {
                        id: "old-cinema".into(),
                        name: "Old Cinema Basement".into(),
                        address: "28 Church Road, Edgbaston, B15 3SH".into(),
                        capacity: 8,
                        experiences: vec![Experience::Cinema, Experience::Vr],
                        base_price_gbp: 42,
                        description: "Descend into the forgotten basement of a 1920s cinema \
                            where the projectors still flicker with ghostly images. Perfect \
                            for immersive horror experiences."
                            .into(),
                        safety_notes: "Steep stairs, confined spaces. Maximum 8 people for \
                            safety reasons."
                            .into(),
                    }],
                },
                Town {
                    id: "harborne".into(),
                    name: "Harborne".into(),
                    venues: vec![Venue {
                        id: "canal-tunnel".into(),
                        name: "Canal Tunnel Entrance".into(),
                        address: "Harborne Canal, B17 0BD".into(),
                        capacity: 15,
                        experiences: vec![Experience::Vr],
                        base_price_gbp: 28,
                        description: "Enter the darkness of the historic Harborne Canal \
                            tunnel. The echoing chambers and dripping walls create the \
                            perfect atmosphere for VR horror adventures."
                            .into(),
                        safety_notes: "Damp conditions, echo effects may be intense. \
                            Waterproof footwear recommended."
                            .into(),
                    }],
                },
            ],
        },
        City {
            id: "london".into(),
            name: "London".into(),
            towns: vec![Town {
                id: "shoreditch".into(),
                name: "Shoreditch".into(),
                venues: vec![Venue {
                    id: "victorian-mortuary".into(),
                    name: "Victorian Mortuary".into(),
                    address: "12 Bethnal Green Rd, London E1 6GY".into(),
                    capacity: 10,
                    experiences: vec![Experience::Cinema, Experience::Vr],
                    base_price_gbp: 55,
                    description: "A genuine Victorian mortuary with original fixtures. The \
                        marble slabs and preservation chambers provide an authentically \
                        chilling experience."
                        .into(),
                    safety_notes: "Very cold conditions, sensitive historical artifacts. \
                        Please respect the venue."
                        .into(),
                }],
            }],
        },
    ];

    let addons = vec![
        Addon {
            id: "snacks".into(),
            name: "Horror Snacks Pack".into(),
            price_gbp: 8,
        },
        Addon {
            id: "extra-vr".into(),
            name: "Extra VR Headset".into(),
            price_gbp: 15,
        },
        Addon {
            id: "photo-package".into(),
            name: "Photo Package".into(),
            price_gbp: 12,
        },
    ];

    let time_slots = vec![
        "18:00".into(),
        "18:30".into(),
        "19:00".into(),
        "19:30".into(),
        "20:00".into(),
        "20:30".into(),
        "21:00".into(),
    ];

    Catalog::new(cities, addons, time_slots)
}
