//! Rule-based certainty-factor diagnosis.
//!
//! [`inference`] holds the pure evaluation core, [`knowledge`] loads the label and rule
//! documents it consumes, and [`router`] exposes both over HTTP.

pub mod config;
pub mod error;
pub mod inference;
pub mod knowledge;
pub mod report;
pub mod router;
pub mod telemetry;
