use clap::Parser;
use hub_activity_cleaner::cli::{run, Cli};
use hub_activity_cleaner::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
