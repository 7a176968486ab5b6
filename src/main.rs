use anyhow::Result;
use clap::Parser;

use krun::cli::{Cli, VERSION};
use krun::run_cycle;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.version {
        println!("{}", VERSION);
        return Ok(());
    }

    run_cycle(&cli.config())?;
    Ok(())
}
