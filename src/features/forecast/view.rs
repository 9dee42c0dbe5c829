//! Forecast View - Derived State and Chart Sinks
//!
//! The rendering layer only ever sees [`ForecastView`]; chart drawing itself
//! happens in a [`ChartSink`].

use std::io::Write;

use serde::Serialize;

use crate::constants::{
    CHART_SERIES_NAME, CHART_TITLE, CHART_Y_AXIS_LABEL, LOADING_LABEL, PREDICT_LABEL,
};
use crate::domain::forecast::ForecastSeries;
use crate::error::Result;
use crate::state::forecast_state::ForecastState;

/// Width of the widest bar in the text chart
const BAR_WIDTH: usize = 40;

/// Static description of the line chart handed to the charting component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub title: &'static str,
    pub series_name: &'static str,
    pub x_key: &'static str,
    pub y_key: &'static str,
    pub y_axis_label: &'static str,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: CHART_TITLE,
            series_name: CHART_SERIES_NAME,
            x_key: "timestamp",
            y_key: "power",
            y_axis_label: CHART_Y_AXIS_LABEL,
        }
    }
}

/// Everything the rendering layer needs, derived from [`ForecastState`]
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView<'a> {
    pub horizon: &'a str,
    pub start_time: &'a str,
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub show_chart: bool,
    pub error_message: Option<String>,
    pub series: &'a ForecastSeries,
    pub chart: ChartSpec,
}

impl<'a> ForecastView<'a> {
    pub fn from_state(state: &'a ForecastState) -> Self {
        let loading = state.is_loading();
        Self {
            horizon: state.horizon(),
            start_time: state.start_time(),
            button_label: if loading { LOADING_LABEL } else { PREDICT_LABEL },
            button_enabled: !loading,
            show_chart: !state.series().is_empty(),
            error_message: state.request().error_message(),
            series: state.series(),
            chart: ChartSpec::default(),
        }
    }
}

/// Consumer of a finished series (the charting collaborator)
pub trait ChartSink {
    fn render(&mut self, chart: &ChartSpec, series: &ForecastSeries) -> Result<()>;
}

/// Plain text table with a proportional bar per point
pub struct TextChart<W> {
    out: W,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSink for TextChart<W> {
    fn render(&mut self, chart: &ChartSpec, series: &ForecastSeries) -> Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "{} [{}]", chart.series_name, chart.y_axis_label)?;

        let label_width = series
            .points()
            .iter()
            .map(|p| p.timestamp.chars().count())
            .max()
            .unwrap_or(0)
            .max(chart.x_key.len());
        let peak = series.peak().map(|p| p.power).unwrap_or(0.0);

        for point in series.points() {
            let bar = if peak > 0.0 && point.power > 0.0 {
                ((point.power / peak) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                self.out,
                "{:<label_width$}  {:>10.3}  {}",
                point.timestamp,
                point.power,
                "#".repeat(bar)
            )?;
        }

        Ok(())
    }
}

/// JSON array of `{timestamp, power}` objects, one document per render
pub struct JsonChart<W> {
    out: W,
}

impl<W: Write> JsonChart<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSink for JsonChart<W> {
    fn render(&mut self, _chart: &ChartSpec, series: &ForecastSeries) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, series).map_err(std::io::Error::from)?;
        writeln!(self.out)?;
        Ok(())
    }
}
