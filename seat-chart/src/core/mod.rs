//! Core module - configuration and error definitions
//!
//! - [`Config`] - runtime configuration
//! - [`ChartError`] - chart errors

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ChartError, LayoutIssue, Result, SeatKey};
