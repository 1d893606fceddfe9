//! crgeo — Command-line interface for crgeo-core
//!
//! Maintains and inspects the Costa Rica administrative divisions dataset.
//! Seed batches are merged into a store with the keyed merge (records whose
//! code is already present are skipped), and the catalog can be listed,
//! searched and checked.
//!
//! Usage examples
//! --------------
//!
//! - Merge seed batches into the bundled district store
//!   $ crgeo merge data/seeds/alajuela-additional.json data/seeds/cartago-heredia.json
//!
//! - Merge into another store, without writing
//!   $ crgeo merge --store /tmp/districts.json --dry-run seeds/limon.json
//!
//! - Counts by province, catalog statistics
//!   $ crgeo summary
//!   $ crgeo stats
//!
//! - Dependent listings and lookups
//!   $ crgeo cantons 2
//!   $ crgeo districts 202
//!   $ crgeo lookup 2 202 20208
//!   $ crgeo find alajuela ramon angeles
//!
//! Logs go to stderr; use `-v` or `RUST_LOG=crgeo_core=debug` for more.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use crgeo_core::prelude::*;
use crgeo_core::{Orphans, TierRecord};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);
    run(args)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let data_dir = args.data_dir.unwrap_or_else(Catalog::default_data_dir);
    info!(data_dir = %data_dir.display(), "using data directory");

    match args.command {
        Commands::Merge {
            store,
            tier,
            create,
            dry_run,
            seeds,
        } => {
            let store = store.unwrap_or_else(|| Catalog::store_path(&data_dir, tier));
            let opts = MergeOpts {
                store: &store,
                create,
                dry_run,
                seeds: &seeds,
            };
            match tier {
                Tier::Provinces => {
                    merge_into::<Province>(&opts)?;
                }
                Tier::Cantons => {
                    merge_into::<Canton>(&opts)?;
                }
                Tier::Districts => {
                    let districts = merge_into::<District>(&opts)?;
                    println!("{}", ProvinceSummary::from_districts(&districts));
                }
            }
        }

        Commands::Summary { store } => {
            let store = store.unwrap_or_else(|| Catalog::store_path(&data_dir, Tier::Districts));
            let districts = Store::<District>::open(&store)
                .with_context(|| format!("cannot read district store {}", store.display()))?;
            println!("{}", ProvinceSummary::from_districts(districts.records()));
        }

        Commands::Stats => {
            let db = load_catalog(&data_dir)?;
            let stats = db.stats();
            println!("Catalog statistics:");
            println!("  Provinces: {}", stats.provinces);
            println!("  Cantons: {}", stats.cantons);
            println!("  Districts: {}", stats.districts);
            if let Some(p) = &stats.province_with_most_cantons {
                println!("  Most cantons: {} ({}) with {}", p.name, p.code, p.count);
            }
            if let Some(c) = &stats.canton_with_most_districts {
                println!("  Most districts: {} ({}) with {}", c.name, c.code, c.count);
            }
            println!("  Total area: {:.2} km²", stats.total_area);
        }

        Commands::Provinces => {
            let db = load_catalog(&data_dir)?;
            for p in db.provinces() {
                println!("{} {}", p.code, p.name);
            }
        }

        Commands::Cantons { province } => {
            let db = load_catalog(&data_dir)?;
            match db.find_province(province) {
                Some(p) => {
                    println!("Cantons in {}:", p.name);
                    for c in db.cantons_by_province(province) {
                        println!("- {} {}", c.code, c.name);
                    }
                }
                None => eprintln!("Province {province} not found"),
            }
        }

        Commands::Districts { canton } => {
            let db = load_catalog(&data_dir)?;
            match db.find_canton(canton) {
                Some(c) => {
                    println!("Districts in {}:", c.name);
                    for d in db.districts_by_canton(canton) {
                        println!("- {} {} ({} km²)", d.code, d.name, d.area);
                    }
                }
                None => eprintln!("Canton {canton} not found"),
            }
        }

        Commands::Lookup {
            province,
            canton,
            district,
        } => {
            let db = load_catalog(&data_dir)?;
            match db.format_location(province, canton, district) {
                Some(text) => println!("{text}"),
                None => bail!("no valid location for {province}/{canton}/{district}"),
            }
        }

        Commands::Find {
            province,
            canton,
            district,
        } => {
            let db = load_catalog(&data_dir)?;
            match db.find_location_by_names(&province, &canton, &district) {
                Some(loc) => println!(
                    "{} ({}/{}/{})",
                    loc, loc.province.code, loc.canton.code, loc.district.code
                ),
                None => println!("No location found matching: {province} / {canton} / {district}"),
            }
        }

        Commands::Check => {
            let db = load_catalog(&data_dir)?;
            let orphans = db.orphans();
            print_orphans(&orphans);
            if !orphans.is_empty() {
                bail!("{} record(s) with a missing parent", orphans.len());
            }
        }
    }

    Ok(())
}

struct MergeOpts<'a> {
    store: &'a Path,
    create: bool,
    dry_run: bool,
    seeds: &'a [PathBuf],
}

/// Load, merge every seed in order, save once. Returns the merged records.
///
/// Every seed is read before the store is touched, so a bad seed aborts the
/// run with the store unchanged.
fn merge_into<T: TierRecord>(opts: &MergeOpts<'_>) -> anyhow::Result<Vec<T>> {
    let mut store = if opts.create {
        Store::<T>::open_or_create(opts.store)
    } else {
        Store::<T>::open(opts.store)
    }
    .with_context(|| format!("cannot read store {}", opts.store.display()))?;

    let batches = opts
        .seeds
        .iter()
        .map(|path| {
            SeedBatch::load_from_path(path)
                .with_context(|| format!("cannot read seed {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    println!("Existing records: {}", store.len());

    let mut total = MergeReport {
        existing: store.len(),
        ..MergeReport::default()
    };
    for batch in batches {
        let name = batch.name.clone();
        let report = store.apply_seed(batch)?;
        println!("  {name}: {} added, {} skipped", report.added, report.skipped);
        total = total.then(report);
    }

    println!(
        "Added {} new record(s), skipped {}; total {}",
        total.added,
        total.skipped,
        total.total()
    );

    if opts.dry_run {
        println!("Dry run: {} left untouched", opts.store.display());
    } else {
        store
            .save()
            .with_context(|| format!("cannot write store {}", opts.store.display()))?;
    }

    Ok(store.into_records())
}

fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    if dir == Catalog::default_data_dir().as_path() {
        return Catalog::load().context("cannot load the bundled catalog");
    }
    Catalog::load_from_dir(dir)
        .with_context(|| format!("cannot load catalog from {}", dir.display()))
}

fn print_orphans(orphans: &Orphans<'_>) {
    if orphans.is_empty() {
        println!("All parent references resolve.");
        return;
    }
    for c in &orphans.cantons {
        println!("canton {} {}: province {} not found", c.code, c.name, c.province_code);
    }
    for d in &orphans.districts {
        println!(
            "district {} {}: canton {} not found",
            d.code, d.name, d.parent_canton_code
        );
    }
}
