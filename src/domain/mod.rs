//! Scheduling domain evaluated by the service layer.

pub mod evaluation;
pub mod schedule;
pub mod types;
