use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// examplan - A terminal wizard for exam seating logistics
#[derive(Parser)]
#[command(name = "examplan")]
#[command(about = "Configure an exam sitting: exam type, cohort, and seatable sections")]
#[command(version)]
pub struct Cli {
    /// Path to a deployment catalog file (JSON).
    ///
    /// Supplies the program, year, and section lists plus the room-capacity
    /// ceiling. Falls back to the built-in deployment catalog when omitted.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive wizard
    Run {
        /// Write the final wizard configuration to this file as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a catalog file
    Validate {
        /// Path to the catalog file to validate
        catalog: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
