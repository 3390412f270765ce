//! Plugin implementations for the extraction pipeline
//!
//! `java` reads source text into a [`java::ClassModel`]; `plantuml` writes
//! that model out as markup and turns markup into server URLs.

pub mod java;
pub mod orchestrator;
pub mod plantuml;

pub use orchestrator::*;
