//! Core generator trait
//!
//! A generator walks a database and produces diagram markup.

use super::Database;

/// Core trait for markup generators
///
/// Generation is deterministic given the database's iteration order.
///
/// # Example
/// ```
/// use umlify::core::Generator;
/// use umlify::plugins::java::ClassModel;
/// use umlify::plugins::plantuml::PlantUmlGenerator;
///
/// let markup = PlantUmlGenerator::new().generate(&ClassModel::new());
/// assert!(markup.ends_with("@enduml"));
/// ```
pub trait Generator<D: Database>: Send + Sync {
    /// The output type of this generator
    type Output;

    /// Generate output for every record in the database
    fn generate(&self, database: &D) -> Self::Output;

    /// Get the name of this generator
    fn name(&self) -> &'static str;

    /// Get the produced markup dialect
    fn format(&self) -> &'static str;
}
