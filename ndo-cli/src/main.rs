//! NDO CLI - Command line tool for analyzing independence and national day overlaps.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ndo-cli",
    version,
    about = "Independence and national day overlap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ndo_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Parsed command line");
    ndo_cmd::run(cli.command)
}
