//! Convert general reaction text to reaction-data XML

mod common;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::info;

use common::{init_logging, report};
use nrates::nuclide::NuclideIndex;
use nrates::reaction::{
    read_reaction_file, validate_reaction_xml_file, write_reaction_xml_file, GeneralOptions,
    Result,
};

/// Convert general reaction text to a reaction-data XML document
///
/// Reactions repeated with the same source, reactants, and products are
/// written once, keeping the last one read.
#[derive(Parser, Debug)]
#[command(name = "reaction-xml", version, author)]
struct Cli {
    /// Reaction text to read
    #[arg(value_name = "IN_TEXT")]
    input: PathBuf,

    /// Reaction-data XML to write
    #[arg(value_name = "OUT_XML")]
    output: PathBuf,

    /// Delimiter for user-supplied fit properties (default whitespace)
    #[arg(long = "user_delim", value_name = "DELIM")]
    user_delimiter: Option<String>,

    /// Check the XML once written
    #[arg(long)]
    validate: bool,

    /// Nuclear data XML used to name species given as <Z> <A> pairs
    #[arg(long, value_name = "XML")]
    nuclides: Option<PathBuf>,

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
    let index = match &cli.nuclides {
        Some(path) => Some(NuclideIndex::from_xml_file(path)?),
        None => None,
    };

    let options = GeneralOptions {
        user_delimiter: cli.user_delimiter.as_deref(),
        index: index.as_ref(),
    };

    let set = read_reaction_file(&cli.input, &options)?;
    write_reaction_xml_file(&set, &cli.output)?;

    if cli.validate {
        let n_reactions = validate_reaction_xml_file(&cli.output)?;
        info!("{} is valid with {n_reactions} reactions", cli.output.display());
    }
    Ok(())
}
