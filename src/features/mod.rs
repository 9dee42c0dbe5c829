//! Features - Vertical Feature Slices
//!
//! Each feature contains its controller and the view state it exposes.

pub mod forecast;
