//! Eventing - Background -> Owner Communication

pub mod app_event;
