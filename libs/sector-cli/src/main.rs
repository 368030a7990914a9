use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod error;
mod run;

use cli::Cli;
use error::CliError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return report(&CliError::from(e)),
    };

    init_logging(cli.verbose);

    match run::run(&cli) {
        Ok(path) => {
            println!("KML file '{}' has been successfully created.", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

/// Logs go to stderr so stdout only carries the result line.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::default().add_directive(level.into()))
        .init();
}

fn report(err: &CliError) -> ExitCode {
    eprintln!("Error: {}", err);
    ExitCode::FAILURE
}
