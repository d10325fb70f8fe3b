//! Rewrite fission reaction text with named species and scaled rates

mod common;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::info;

use common::{init_logging, report};
use nrates::nuclide::NuclideIndex;
use nrates::reaction::{convert_fission_file, Result};

/// Rewrite fission reaction text as general reaction text
///
/// Species given as (Z, A) pairs are named through the nuclear data, every
/// product branch is checked to conserve Z and A, and each branch is written
/// as its own reaction with rates scaled by the branching factor.
#[derive(Parser, Debug)]
#[command(name = "fission-text", version, author)]
struct Cli {
    /// Nuclear data XML used to name species
    #[arg(value_name = "IN_XML")]
    nuclides: PathBuf,

    /// Fission reaction text to read
    #[arg(value_name = "IN_TEXT")]
    input: PathBuf,

    /// Reaction text to write
    #[arg(value_name = "OUT_TEXT")]
    output: PathBuf,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let index = NuclideIndex::from_xml_file(&cli.nuclides)?;
    let n_records = convert_fission_file(&index, &cli.input, &cli.output)?;
    info!("{n_records} records written to {}", cli.output.display());
    Ok(())
}
