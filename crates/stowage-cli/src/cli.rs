//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stowage_types::OutputFormat;

#[derive(Parser)]
#[command(name = "stowage")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fleet load accounting with weight and volume caps")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive fleet console (the default)
    Shell,

    /// Offer a CSV manifest to a carrier and report what fits
    CheckLoad {
        /// Path to CSV manifest (kind,id,weight,volume)
        #[arg(long)]
        manifest: PathBuf,

        /// Carrier weight cap in kilograms
        #[arg(long)]
        max_weight: u32,

        /// Carrier volume cap in cubic meters
        #[arg(long)]
        max_volume: f64,

        /// Carrier id used in the report
        #[arg(long, default_value = "SIM-1")]
        carrier_id: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Show or hide the console banner
        #[arg(long)]
        set_banner: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
