use clap::Parser;
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "obyde")]
#[command(about = "Moves and processes markdown vaults (mainly Obsidian) to a publishable format")]
#[command(version)]
pub struct Cli {
    /// Path to the YAML config file
    #[arg(short, long)]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}
