use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::Pipeline;
use crate::utils::progress::ProgressReporter;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when running under a test harness.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the pipeline in the current directory and print the summary.
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let progress = ProgressReporter::new_spinner("Cleaning activity log...", cli.quiet);
    let pipeline = Pipeline::new(".");
    let summary = pipeline.run(Some(&progress))?;

    println!("\n{}", summary.summary());

    Ok(())
}
