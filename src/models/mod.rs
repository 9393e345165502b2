//! Runtime models shared across the evaluator service.

pub mod config;
