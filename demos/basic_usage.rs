//! Basic usage example for crgeo-rs
//!
//! This example demonstrates how to:
//! - Load the bundled catalog
//! - Walk provinces, cantons and districts
//! - Validate and format a location
//! - Search by names

use crgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== crgeo-rs Basic Usage Example ===\n");

    let db = Catalog::load()?;
    println!("✓ Catalog loaded\n");

    // Example 1: Provinces
    println!("--- Example 1: Provinces ---");
    for p in db.provinces() {
        println!("{}. {} ({} cantons)", p.code, p.name, db.cantons_by_province(p.code).len());
    }
    println!();

    // Example 2: Dependent listing
    println!("--- Example 2: Districts of San José (101) ---");
    for d in db.districts_by_canton(101).iter().take(5) {
        println!("{} {} - {} km²", d.code, d.name, d.area);
    }
    println!();

    // Example 3: Validation
    println!("--- Example 3: Validate locations ---");
    for (p, c, d) in [(1, 101, 10101), (2, 101, 10101), (1, 101, 99999)] {
        match db.format_location(p, c, d) {
            Some(text) => println!("  {p}/{c}/{d}: {text}"),
            None => println!("  {p}/{c}/{d}: invalid"),
        }
    }
    println!();

    // Example 4: Name search (accent-insensitive)
    println!("--- Example 4: Find by names ---");
    if let Some(loc) = db.find_location_by_names("san jose", "escazu", "san antonio") {
        println!("  {loc} -> {}", loc.district.code);
    }
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Statistics ---");
    let stats = db.stats();
    println!("Provinces: {}", stats.provinces);
    println!("Cantons: {}", stats.cantons);
    println!("Districts: {}", stats.districts);
    println!("Total area: {:.2} km²", stats.total_area);
    println!("\n{}", db.summary());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
