use clap::Parser;
use obyde::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    obyde::init(cli.verbose)?;

    commands::run(&cli)?;
    Ok(())
}
