use clap::{Args, Subcommand};
use sextet::{LineLength, LineTerminator};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Wrap encoded lines after COLS characters: 0, 64 or 76
    #[arg(short = 'w', long, value_name = "COLS", value_parser = LineLength::from_str)]
    pub wrap: Option<LineLength>,

    /// Line terminator used when wrapping: cr, lf or crlf
    #[arg(short = 't', long, value_name = "EOL", value_parser = LineTerminator::from_str)]
    pub terminator: Option<LineTerminator>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Skip characters outside the base64 alphabet
    #[arg(short = 'i', long, visible_alias = "lenient")]
    pub ignore_garbage: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show effective settings after user and local overrides
    Show {
        /// Output as JSON
        #[arg(long, conflicts_with = "toml")]
        json: bool,

        /// Output as a TOML settings file
        #[arg(long)]
        toml: bool,
    },
}
