use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate route elevation profiles.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// KML file containing the route path.
    #[arg(short, long)]
    pub kml: PathBuf,

    /// JSON file with one elevation sample per path coordinate.
    #[arg(short, long)]
    pub samples: Option<PathBuf>,

    /// Treat elevation samples as meters and convert to feet.
    #[arg(long, default_value_t = false)]
    pub meters: bool,

    /// Seed for the simulated profile used when no samples are given.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print profile points to stdout.
    Csv,

    /// Print profile points as JSON.
    Json,

    /// Plot to terminal.
    Plot,

    /// Summarize climb statistics and check against a target grade.
    Grade {
        /// Desired grade, in percent.
        #[arg(long, default_value_t = 2.0)]
        target: f64,

        /// Fractional tolerance around the target grade.
        #[arg(long, default_value_t = 0.10)]
        overall_tolerance: f64,

        /// Fraction of total distance allowed outside the band.
        #[arg(long, default_value_t = 0.01)]
        local_tolerance: f64,
    },
}
