use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// style-lab - inspect and drive the editor's session state
#[derive(Parser, Debug)]
#[command(name = "style-lab")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON config file (log_filter, pretty_json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the startup state as JSON
    Show,
    /// List every field with its default value
    Fields,
    /// Apply FIELD=VALUE assignments in order and print the resulting state
    Apply {
        #[arg(value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// Apply FIELD=VALUE assignments, then print a single field
    Get {
        field: String,
        #[arg(value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },
}
