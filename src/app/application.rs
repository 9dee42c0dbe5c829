//! Application - Headless Forecast Session
//!
//! Wires configuration, controller and chart sink together for one run:
//! apply the inputs, dispatch the request, pump events until it completes,
//! then hand the series to the chart sink.

use std::io::Write;

use crate::app::cli::CliArgs;
use crate::error::Result;
use crate::features::forecast::{
    ChartSink, ForecastController, JsonChart, SubmitOutcome, TextChart,
};
use crate::services::PredictionService;
use crate::utils::config_store::load_forecast_config;

/// Failure recorded when the request task goes away without reporting
pub const TASK_ENDED: &str = "request task ended without a result";

/// Run one forecast session against the configured service
///
/// Returns whether the forecast succeeded.
pub fn run_app(args: CliArgs) -> Result<bool> {
    let config = load_forecast_config(args.api_url.clone())?;
    let mut controller = ForecastController::new(&config)?;

    let stdout = std::io::stdout();
    if args.json {
        run_session(&mut controller, &args, &mut JsonChart::new(stdout.lock()))
    } else {
        run_session(&mut controller, &args, &mut TextChart::new(stdout.lock()))
    }
}

/// Drive a controller through one request and render the result
pub fn run_session<S, K>(
    controller: &mut ForecastController<S>,
    args: &CliArgs,
    sink: &mut K,
) -> Result<bool>
where
    S: PredictionService + Clone + 'static,
    K: ChartSink,
{
    if let Some(days) = &args.days {
        controller.set_horizon(days.as_str())?;
    }
    if let Some(start) = &args.start {
        controller.set_start_time(start.as_str())?;
    }

    let (tx, rx) = crossbeam_channel::unbounded();
    let mut outcome = controller.dispatch(&tx);
    // The spawned task holds the only sender from here on
    drop(tx);

    while matches!(outcome, SubmitOutcome::Dispatched { .. }) {
        let Ok(event) = rx.recv() else {
            break;
        };
        outcome = controller.handle_event(event);
    }

    if controller.state().is_loading() {
        tracing::error!("Forecast task ended without reporting a result");
        controller.abandon(TASK_ENDED);
    }

    let view = controller.view();
    if view.show_chart {
        sink.render(&view.chart, view.series)?;
    }
    if let Some(message) = &view.error_message {
        let mut stderr = std::io::stderr();
        writeln!(stderr, "Forecast failed: {message}")?;
    }

    Ok(controller.state().request().is_success())
}
