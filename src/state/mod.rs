//! State - View State Modules
//!
//! Plain data owned by a controller; mutation goes through the controller.

pub mod forecast_state;
