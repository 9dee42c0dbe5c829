//! Forecast feature: request a power forecast and chart it.

pub mod controller;
pub mod view;

pub use controller::*;
pub use view::*;
