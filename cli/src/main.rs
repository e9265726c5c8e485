//! SonarEQ - EqualizerAPO to Sonar preset importer
//!
//! Reads a parametric EQ export and writes it into a new or existing preset
//! of the mixer's database.

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sonareq_core::{import_preset, load_filters, ImportMode, SqlitePresetStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> ExitCode {
    // Logs go to stderr so console messages stay readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sonareq=info,sonareq_core=info,sonareq_eq=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let filters = load_filters(&args.eqfile)?;
    let request = args.import_request();

    let config = args.store_config();
    let mut store = SqlitePresetStore::open(&config).context("Cannot open Sonar preset database")?;

    let record = import_preset(&mut store, &request, &filters)?;
    info!("Preset {} written", record.id);

    match request.mode {
        ImportMode::Create => {
            println!(
                "Successfully created Preset in Channel {} with name {}",
                request.channel, request.name
            );
            println!("You need to Close and reopen Steelseries GG to see the new config.");
        }
        ImportMode::Update => {
            println!(
                "Successfully updated Preset in Channel {} with name {}",
                request.channel, request.name
            );
            println!("You need to reopen the Sonar Window for the new config to load.");
        }
    }

    Ok(())
}
