use clap::Parser;
use shelfkit::cli::{run, Cli};
use shelfkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_level())?;

    run(cli)
}
