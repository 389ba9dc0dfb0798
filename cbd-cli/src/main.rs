//! CBD CLI - Command line tool for the New York Citi Bike dashboard datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cbd-cli",
    version,
    about = "New York Citi Bike 2022 dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cbd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[CBD] cli: starting");
    cbd_cmd::run(cli.command)
}
