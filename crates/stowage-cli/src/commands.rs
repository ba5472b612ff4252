//! Command handlers

use std::path::PathBuf;

use stowage_app::{load_manifest, Config};
use stowage_domain::{generate_load_report, plan_load, Carrier, CarrierClaims, FleetRegistry};
use stowage_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::shell::Session;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        None | Some(Commands::Shell) => cmd_shell(&config, output_format, cli.verbose),

        Some(Commands::CheckLoad {
            manifest,
            max_weight,
            max_volume,
            carrier_id,
        }) => cmd_check_load(
            manifest,
            max_weight,
            max_volume,
            &carrier_id,
            output_format,
            cli.verbose,
        ),

        Some(Commands::Config {
            show,
            set_format,
            set_banner,
            reset,
        }) => cmd_config(show, set_format, set_banner, reset),
    }
}

fn cmd_shell(config: &Config, output_format: OutputFormat, verbose: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(output_format, verbose, config.show_banner);
    session.run(&mut stdin.lock(), &mut stdout.lock())
}

fn cmd_check_load(
    manifest: PathBuf,
    max_weight: u32,
    max_volume: f64,
    carrier_id: &str,
    output_format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let items = load_manifest(&manifest).map_err(|e| Error::Manifest(e.to_string()))?;
    if verbose {
        eprintln!("Loaded {} item(s) from {}", items.len(), manifest.display());
    }

    // Scratch registry standing in as the carrier's owner for the simulation
    let staging = FleetRegistry::new("staging", CarrierClaims::new())?;
    let mut carrier = Carrier::new(carrier_id, max_weight, max_volume, &staging)?;
    let plan = plan_load(&mut carrier, items)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let report = generate_load_report(&plan);
            println!("{}", report);
        }
    }

    if plan.rejected > 0 {
        eprintln!("Warning: {} item(s) did not fit", plan.rejected);
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_banner: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(format) = set_format {
        config.output_format = format;
        modified = true;
    }

    if let Some(show_banner) = set_banner {
        config.show_banner = show_banner;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
