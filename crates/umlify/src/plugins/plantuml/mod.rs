//! PlantUML plugin
//!
//! Generates class diagram markup and builds server URLs for it.

mod generator;
mod parameters;
mod server;

pub use generator::{PlantUmlGenerator, PREAMBLE, TERMINATOR};
pub use parameters::{format_parameter, format_parameters, split_parameters};
pub use server::{encode_bytes, encode_markup, PlantUmlServer};
