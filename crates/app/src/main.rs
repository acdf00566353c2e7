//! Faded Steps - booking flow demo driver
//!
//! Walks a scripted booking end to end against the in-memory core: browse
//! the catalog, sign in, fill a draft, run the checkout wizard, and show
//! the customer and admin dashboards. Pass a catalog TOML path as the
//! first argument to replace the bundled seed data.

use std::path::Path;
use std::process::ExitCode;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fadedsteps_core::auth::access::{can_access, Surface};
use fadedsteps_core::booking::reports;
use fadedsteps_core::{
    BookingSession, Catalog, ContactDetails, DraftPatch, Experience, Identity,
    InMemoryBookingStore, Result, StepAdvance,
};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Faded Steps demo");

    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_demo(&catalog) {
        tracing::error!("Demo booking failed: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Use the catalog document given on the command line, or the seed
fn load_catalog() -> Result<Catalog> {
    match std::env::args().nth(1) {
        Some(path) => Catalog::load_from_toml(Path::new(&path)),
        None => Ok(fadedsteps_core::seed()),
    }
}

fn run_demo(catalog: &Catalog) -> Result<()> {
    println!("Faded Steps - haunted venues across the UK");
    for city in catalog.cities() {
        println!("  {}", city.name);
        for town in &city.towns {
            for venue in &town.venues {
                println!(
                    "    {} / {} - {} (up to {} guests, from £{})",
                    town.name, venue.name, venue.address, venue.capacity, venue.base_price_gbp
                );
            }
        }
    }

    // Sign in as the demo customer
    let mut identity = Identity::with_seed_users();
    let user = identity.login("john@example.com")?.clone();
    let mut store = InMemoryBookingStore::with_seed_booking(user.id);

    if !can_access(Some(user.role), Surface::Checkout) {
        tracing::warn!("Demo user may not check out");
        return Ok(());
    }

    // Pick a venue and fill the booking widget
    let mut session = BookingSession::new();
    let venue = session.start_booking(catalog, "abandoned-mill")?;
    println!("\nBooking {} ({})", venue.name, venue.address);

    session.set_draft_fields(
        DraftPatch::new()
            .with_experience(Experience::Vr)
            .with_date("2025-11-01".parse().unwrap_or_default())
            .with_time("19:30")
            .with_guests(4),
    );

    // Walk the wizard
    session.begin_checkout(catalog, Some(&user))?;
    session.advance_step(catalog, &mut store, Some(&user))?; // Review -> Add-ons

    session.toggle_addon(catalog, "snacks")?;
    session.toggle_addon(catalog, "extra-vr")?;
    println!("Running total: £{}", session.current_total(catalog)?);

    session.advance_step(catalog, &mut store, Some(&user))?; // Add-ons -> Details
    session.set_contact_details(ContactDetails {
        name: user.name.clone(),
        email: user.email.clone(),
        phone: "07700 900000".into(),
    })?;
    session.set_terms_accepted(true)?;
    session.advance_step(catalog, &mut store, Some(&user))?; // Details -> Payment

    let outcome = session.advance_step(catalog, &mut store, Some(&user))?;
    if let StepAdvance::Completed(booking) = outcome {
        println!(
            "Booked! {} on {} at {} for {} guests - £{} ({})",
            booking.venue_id,
            booking.date,
            booking.time,
            booking.guests,
            booking.total_gbp,
            booking.status
        );
    }

    // Customer dashboard
    let today = Utc::now().date_naive();
    let mine = reports::customer_bookings(&store, user.id, today);
    println!(
        "\n{}: {} upcoming, {} past booking(s)",
        user.name,
        mine.upcoming.len(),
        mine.past.len()
    );

    // Admin overview
    let overview = reports::admin_overview(&store, catalog);
    println!(
        "Site: {} bookings, £{} revenue, {} venues in {} cities",
        overview.total_bookings,
        overview.total_revenue_gbp,
        overview.total_venues,
        overview.total_cities
    );

    Ok(())
}
