use clap::{ArgAction, Parser, Subcommand};
use crgeo_core::Tier;
use std::path::PathBuf;

/// CLI arguments for crgeo
#[derive(Debug, Parser)]
#[command(
    name = "crgeo",
    version,
    about = "Merge seed batches into, and query, the Costa Rica administrative divisions dataset"
)]
pub struct CliArgs {
    /// Directory holding provinces.json, cantons.json and districts.json
    /// (default: the dataset bundled with crgeo-core)
    #[arg(short = 'd', long = "data-dir", global = true, env = "CRGEO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge seed batches into a store; records whose code is already present are skipped
    Merge {
        /// Store file to merge into (default: the data dir's file for --tier)
        #[arg(short = 's', long = "store")]
        store: Option<PathBuf>,

        /// Tier the store holds: provinces, cantons or districts
        #[arg(short = 't', long = "tier", default_value = "districts")]
        tier: Tier,

        /// Start an empty store when the store file does not exist
        #[arg(long = "create")]
        create: bool,

        /// Merge and report, but leave the store file untouched
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Seed batch files, applied in the order given
        #[arg(required = true)]
        seeds: Vec<PathBuf>,
    },

    /// District counts by province
    Summary {
        /// District store to summarize (default: the data dir's districts.json)
        #[arg(short = 's', long = "store")]
        store: Option<PathBuf>,
    },

    /// Totals and the busiest province and canton
    Stats,

    /// List all provinces
    Provinces,

    /// List the cantons of a province
    Cantons {
        /// Province code (1-7)
        province: u32,
    },

    /// List the districts of a canton
    Districts {
        /// Canton code (e.g. 202)
        canton: u32,
    },

    /// Resolve and validate a province/canton/district code triple
    Lookup {
        province: u32,
        canton: u32,
        district: u32,
    },

    /// Find a location by (partial, accent-insensitive) names
    Find {
        province: String,
        canton: String,
        district: String,
    },

    /// Report cantons and districts whose parent does not exist
    Check,
}
