//! Power Forecast Client Library
//!
//! Request orchestration and view state for a multi-day power consumption
//! forecast: validates the user's horizon and start time, posts them to the
//! external prediction service, and turns the reply into a chartable series.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod utils;
