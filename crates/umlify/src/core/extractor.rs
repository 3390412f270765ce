//! Core extractor trait
//!
//! An extractor turns source text into records stored in a database.
//! Extraction is heuristic and infallible: anything it does not recognize
//! is skipped.

use super::{Database, ExtractionMode};

/// Core trait for structural extractors
///
/// # Example
/// ```
/// use umlify::core::{Database, Extractor};
/// use umlify::plugins::java::{ClassModel, JavaExtractor};
///
/// let extractor = JavaExtractor::class_mode();
/// let mut model = ClassModel::new();
/// extractor.extract_into("class A {\n  int x;\n}", &mut model);
/// assert_eq!(model.record_count(), 1);
/// ```
pub trait Extractor<D: Database>: Send + Sync {
    /// Scan `input` and add every recognized declaration to `database`
    fn extract_into(&self, input: &str, database: &mut D);

    /// Get the name of this extractor
    fn name(&self) -> &'static str;

    /// The scanner configuration this extractor runs with
    fn mode(&self) -> ExtractionMode;

    /// Check whether the input contains anything this extractor recognizes
    fn can_extract(&self, input: &str) -> bool;
}
