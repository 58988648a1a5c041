//! Core library components.
//!
//! Properties parsing, signing resolution, project configuration and the
//! release build plan.

pub mod config;
pub mod constants;
pub mod host;
pub mod plan;
pub mod properties;
pub mod signing;
