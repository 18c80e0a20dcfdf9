pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// icongen - SignalCalc app-icon set generator
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `generate` when no subcommand is given.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full icon set to an output directory
    Generate(generate::GenerateArgs),

    /// Print the size table or the upload-purpose guide
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
