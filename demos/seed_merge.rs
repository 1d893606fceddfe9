//! Seed merge example for crgeo-rs
//!
//! Copies the bundled district store to a temporary file, merges every
//! bundled seed batch into it twice, and shows that the second pass adds
//! nothing.

use crgeo_rs::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== crgeo-rs Seed Merge Example ===\n");

    let data_dir = Catalog::default_data_dir();
    let seeds_dir = data_dir.join("../seeds");
    let work = std::env::temp_dir().join("crgeo-demo-districts.json");
    fs::copy(Catalog::store_path(&data_dir, Tier::Districts), &work)?;

    let mut seeds: Vec<_> = fs::read_dir(&seeds_dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    seeds.sort();

    for pass in 1..=2 {
        let mut store = Store::<District>::open(&work)?;
        println!("--- Pass {pass}: {} existing ---", store.len());
        for path in &seeds {
            let batch = SeedBatch::load_from_path(path)?;
            let name = batch.name.clone();
            let report = store.apply_seed(batch)?;
            println!("  {name}: +{} (skipped {})", report.added, report.skipped);
        }
        store.save()?;
        println!("{}\n", ProvinceSummary::from_districts(store.records()));
    }

    fs::remove_file(&work)?;
    Ok(())
}
