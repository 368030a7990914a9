use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Usage line shown with argument errors.
pub const USAGE: &str = "sectored-circle <LATITUDE> <LONGITUDE> R<RADIUS> <DIVISIONS>";

#[derive(Parser, Debug)]
#[command(name = "sectored-circle")]
#[command(version, about = "Generate a KML circle split into evenly spaced sectors")]
pub struct Cli {
    /// Center latitude in degrees
    #[arg(allow_hyphen_values = true)]
    pub latitude: String,

    /// Center longitude in degrees
    #[arg(allow_hyphen_values = true)]
    pub longitude: String,

    /// Radius in kilometers, prefixed with R (e.g. R100)
    pub radius: String,

    /// Number of division lines: 4, 8, 16, 32 or 64
    #[arg(allow_negative_numbers = true)]
    pub divisions: String,

    /// Directory to write the KML file into (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
