//! Integration tests for the one-shot check-load command

use clap::Parser;
use tempfile::tempdir;

use stowage_cli::cli::{Cli, Commands};
use stowage_cli::commands;
use stowage_types::OutputFormat;

#[test]
fn test_check_load_with_fitting_manifest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manifest.csv");
    std::fs::write(
        &path,
        "kind,id,weight,volume\n\
         bulk,V001,10,20.0\n\
         pallet,P001,5,10.0\n",
    )
    .unwrap();

    let cli = Cli {
        command: Some(Commands::CheckLoad {
            manifest: path,
            max_weight: 10000,
            max_volume: 50.0,
            carrier_id: "SIM-1".to_string(),
        }),
        format: Some(OutputFormat::Json),
        verbose: false,
    };

    commands::execute(cli).unwrap();
}

#[test]
fn test_check_load_with_missing_manifest() {
    let cli = Cli {
        command: Some(Commands::CheckLoad {
            manifest: "no-such-manifest.csv".into(),
            max_weight: 100,
            max_volume: 10.0,
            carrier_id: "SIM-1".to_string(),
        }),
        format: Some(OutputFormat::Table),
        verbose: false,
    };

    let err = commands::execute(cli).unwrap_err();
    assert!(err.to_string().contains("Manifest error"));
}

#[test]
fn test_check_load_rejects_bad_kind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manifest.csv");
    std::fs::write(&path, "crate,X001,10,20.0\n").unwrap();

    let cli = Cli {
        command: Some(Commands::CheckLoad {
            manifest: path,
            max_weight: 100,
            max_volume: 10.0,
            carrier_id: "SIM-1".to_string(),
        }),
        format: Some(OutputFormat::Table),
        verbose: false,
    };

    let err = commands::execute(cli).unwrap_err();
    assert!(err.to_string().contains("Unknown cargo kind"));
}

#[test]
fn test_cli_parses_check_load() {
    let cli = Cli::try_parse_from([
        "stowage",
        "check-load",
        "--manifest",
        "items.csv",
        "--max-weight",
        "9000",
        "--max-volume",
        "42.5",
        "--format",
        "json",
    ])
    .unwrap();

    assert!(matches!(cli.format, Some(OutputFormat::Json)));
    match cli.command {
        Some(Commands::CheckLoad {
            max_weight,
            max_volume,
            carrier_id,
            ..
        }) => {
            assert_eq!(max_weight, 9000);
            assert!((max_volume - 42.5).abs() < 0.01);
            assert_eq!(carrier_id, "SIM-1");
        }
        _ => panic!("expected check-load command"),
    }
}

#[test]
fn test_cli_defaults_to_shell() {
    let cli = Cli::try_parse_from(["stowage"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.format.is_none());
    assert!(!cli.verbose);
}
