use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::*;
use std::time::Instant;
use tracing::debug;

use wayrecon::constants::EXIT_INTERRUPTED;
use wayrecon::logging::init_logging;
use wayrecon::{CdxError, Cli, process_query};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Bare invocation prints usage instead of failing on the missing domain
    if std::env::args_os().len() == 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    let start_time = Instant::now();
    let exit_code = tokio::select! {
        result = process_query(&cli) => match result {
            Ok(outcome) => {
                debug!(
                    "done: {} of {} records matched in {:?}",
                    outcome.matched_count,
                    outcome.parsed_count,
                    start_time.elapsed()
                );
                0
            }
            Err(err) => {
                report_error(&err);
                err.exit_code()
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("\nOperation cancelled by user.");
            EXIT_INTERRUPTED
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn report_error(err: &CdxError) {
    eprintln!("{} {}", "[Error]".red(), err);
    if let CdxError::InvalidInput(_) = err {
        eprintln!("Example: wayrecon -u example.com");
    }
}
