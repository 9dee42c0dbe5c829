//! Application Layer
//!
//! Command line parsing and the headless session that drives the forecast
//! controller.

pub mod application;
pub mod cli;
