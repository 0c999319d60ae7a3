//! cbuild CLI - build a C program from cbuild.txt
//!
//! Entry point for the cbuild command-line application.

use tracing_subscriber::EnvFilter;

use cbuild::cli::output::display_error;
use cbuild::cli::Cli;
use cbuild::config::defaults::DEFAULT_LOG_DIRECTIVE;

fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse_args(std::env::args_os());

    // Run the build and handle errors
    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
