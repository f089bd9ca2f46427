use std::path::PathBuf;

use clap::Parser;

pub mod global;

pub use global::{GlobalFlags, GrammarArg, OutputFormat};

/// Top-level CLI parser for the `vecbin` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vecbin",
    version,
    about = "Convert literal test-vector fixtures into binary artifact files"
)]
pub struct Cli {
    /// Destination directory; created by vecbin and must not already exist
    pub dest: PathBuf,

    /// Fixture file to read (defaults to config `extract.input`, then tests.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fixture grammar (defaults to config `extract.grammar`, then bcrypt)
    #[arg(short, long)]
    pub grammar: Option<GrammarArg>,

    /// Report format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for the handler.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
