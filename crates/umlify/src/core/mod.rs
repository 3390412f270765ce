//! Core abstractions for structural extraction
//!
//! This module defines the traits every pipeline stage implements and the
//! shared vocabulary types they exchange.

mod config;
mod database;
mod detector;
mod error;
mod extractor;
mod generator;
pub mod logging;
mod service;
mod types;

pub use config::*;
pub use database::*;
pub use detector::*;
pub use error::*;
pub use extractor::*;
pub use generator::*;
pub use logging::*;
pub use service::*;
pub use types::*;
