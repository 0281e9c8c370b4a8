use category_totals::args::Args;
use category_totals::{run, Config};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());
    trace!("{args:?}");

    let config = Config::from_args(&args);
    match run(&config, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Exactly one line on stderr, regardless of the log level
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so that stdout only ever carries JSON.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only. The library
            // and the binary share the same crate name.
            EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME")))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
