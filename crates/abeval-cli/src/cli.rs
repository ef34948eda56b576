use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The abeval developers",
    version,
    about = "abeval CLI - Evaluate the energy of 3D AB off-lattice protein conformations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the AB energy of every angle vector in a file.
    Energy(EnergyArgs),
    /// Print the search-space bounds of every coordinate for a chain length.
    Bounds(BoundsArgs),
    /// Export the monomer positions of every angle vector as CSV.
    Coords(CoordsArgs),
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    // --- Core Arguments ---
    /// Path to the sequence file (whitespace-separated labels, 1 = hydrophobic).
    #[arg(short, long, value_name = "PATH")]
    pub sequence: Option<PathBuf>,

    /// Path to the angle file, one vector of 2N-5 angles per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub angles: PathBuf,

    /// Number of monomers to read from the sequence file.
    /// Derived from the angle vector length when omitted.
    #[arg(short = 'n', long, value_name = "INT")]
    pub monomers: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Forcefield Overrides ---
    /// Override the AB coefficient file.
    #[arg(short, long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,

    // --- Output ---
    /// Print the bend, torsion and Lennard-Jones terms next to the total.
    #[arg(long)]
    pub terms: bool,

    /// Write the results as CSV instead of printing them.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S sequence.monomers=13
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `bounds` subcommand.
#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Number of monomers in the chain.
    #[arg(short = 'n', long, required = true, value_name = "INT")]
    pub monomers: usize,
}

/// Arguments for the `coords` subcommand.
#[derive(Args, Debug)]
pub struct CoordsArgs {
    /// Path to the angle file, one vector of 2N-5 angles per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub angles: PathBuf,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the AB coefficient file (only the bond length is used).
    #[arg(short, long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,
}
