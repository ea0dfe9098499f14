use clap::Parser;

/// The transformation itself takes no options; these only control output.
#[derive(Parser, Debug)]
#[command(name = "hub-activity-cleaner")]
#[command(about = "Split a hub activity log into referrals.csv and activities.csv")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the progress spinner")]
    pub quiet: bool,
}
