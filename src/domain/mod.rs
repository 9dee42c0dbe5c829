//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on the runtime or the HTTP stack and represent
//! the forecast domain and its wire format.

pub mod config;
pub mod forecast;
