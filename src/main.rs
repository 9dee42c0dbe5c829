//! Power Forecast - Main Entry Point
//!
//! Requests one forecast and prints it as a text chart (or JSON).

use clap::Parser;
use power_forecast::app::application::run_app;
use power_forecast::app::cli::CliArgs;
use power_forecast::constants::LOG_FILE_PREFIX;
use power_forecast::helpers::get_or_create_data_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log to stderr, plus a daily rolling file when the data directory is usable
fn init_logging() -> Option<WorkerGuard> {
    let filter = || {
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let guard = init_logging();

    tracing::info!("Starting Power Forecast...");

    let succeeded = run_app(args)?;
    drop(guard);
    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
