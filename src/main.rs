use anyhow::Context;
use clap::Parser;

use tompkins::cli::{run, Cli};
use tompkins::logging::{init_logging, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let outcome = run(&cli).context("could not generate the Tompkins triangle")?;

    if cli.print {
        println!("{}", outcome.triangle);
    }
    println!("Saved: {}", outcome.resolved.display());

    Ok(())
}
