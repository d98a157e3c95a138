use clap::Parser;
use clinvar_vcf::{
    cli::{init_logging, Cli, FULL_VERSION},
    commands::annotate,
    utils::{
        util::{handle_error_and_exit, Result},
        util_intern::{peak_memory_usage, readable_size},
    },
};
use std::time;

fn runner() -> Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging(&cli)?;

    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), FULL_VERSION);
    log::info!("Start time: {}", chrono::Local::now());
    log::info!("Logging to {}", log_path.display());
    log::debug!("CLI options set: {:#?}", cli);

    let start_timer = time::Instant::now();
    let summary = annotate(&cli.args)?;
    summary.log();
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());

    match peak_memory_usage() {
        Ok(bytes) => {
            let (size, unit) = readable_size(bytes);
            log::info!("Peak memory use: {:.2} {}", size, unit);
        }
        Err(e) => log::debug!("Peak memory use unavailable: {}", e),
    }

    log::info!("End time: {}", chrono::Local::now());
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
