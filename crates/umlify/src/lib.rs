//! Umlify - Turn Java-shaped source into PlantUML class diagrams
//!
//! A library that scans class and interface declarations line by line,
//! builds an ordered structural model and writes it out as PlantUML markup.
//!
//! # Quick Start
//!
//! ```rust
//! use umlify::render;
//!
//! let markup = render("public class Foo { private int bar; public void baz() { int x; } }");
//! assert!(markup.contains("    - bar : int"));
//! assert!(markup.contains("    + baz() : void"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use umlify::prelude::*;
//!
//! let input = "public interface Shape {\n    double area();\n}";
//!
//! // Extract into a model
//! let extractor = JavaExtractor::interface_mode();
//! let mut model = ClassModel::new();
//! extractor.extract_into(input, &mut model);
//!
//! // Inspect the extracted data
//! assert_eq!(model.len(), 1);
//! assert_eq!(model.get("Shape").unwrap().methods[0].name, "area");
//!
//! // Generate PlantUML
//! let markup = PlantUmlGenerator::new().generate(&model);
//! assert!(markup.ends_with("@enduml"));
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

use crate::plugins::java::ClassModel;
use crate::plugins::orchestrator::Orchestrator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Database, Detector, DiagramService, ExtractionMode, Extractor, Generator, ImageFormat,
        Modifier, PipelineConfig, ServerConfig, TypeKind, UmlError, Visibility,
    };
    pub use crate::plugins::java::{
        AttributeRecord, ClassDetector, ClassModel, InterfaceDetector, JavaExtractor,
        MethodRecord, TypeRecord,
    };
    pub use crate::plugins::orchestrator::Orchestrator;
    pub use crate::plugins::plantuml::{PlantUmlGenerator, PlantUmlServer};
}

/// Extract the structural model in class mode
///
/// Lines inside method bodies are skipped, so locals never become
/// attributes. Use [`extract_with_mode`] for interface sources.
///
/// # Example
/// ```rust
/// use umlify::extract;
///
/// let model = extract("class Point {\n    private int x;\n}");
/// assert_eq!(model.attribute_count(), 1);
/// ```
pub fn extract(input: &str) -> ClassModel {
    Orchestrator::new().extract(input, None)
}

/// Extract the structural model with a fixed mode
pub fn extract_with_mode(input: &str, mode: ExtractionMode) -> ClassModel {
    Orchestrator::new().extract(input, Some(mode))
}

/// Extract the structural model, letting the detectors pick the mode
///
/// Interface mode is only picked for documents without method bodies.
pub fn extract_auto(input: &str) -> ClassModel {
    Orchestrator::new().with_auto_detect().extract(input, None)
}

/// Generate PlantUML markup for a model
pub fn generate(model: &ClassModel) -> String {
    use crate::plugins::plantuml::PlantUmlGenerator;

    PlantUmlGenerator::new().generate(model)
}

/// Convert source text straight to PlantUML markup
///
/// This is the simplest way to get a diagram. Extraction runs in class
/// mode.
pub fn render(input: &str) -> String {
    Orchestrator::new().process(input, None)
}

/// Convert source text to markup, letting the detectors pick the mode
///
/// # Example
/// ```rust
/// use umlify::render_auto;
///
/// let markup = render_auto("interface Shape {\n    double area();\n}");
/// assert!(markup.contains("    + area() : double"));
/// ```
pub fn render_auto(input: &str) -> String {
    Orchestrator::new().with_auto_detect().process(input, None)
}

/// Convert source text to markup with a fixed extraction mode
///
/// # Example
/// ```rust
/// use umlify::{render_with_mode, ExtractionMode};
///
/// // Class mode drops bodiless signatures
/// let markup = render_with_mode("interface Shape {\n    double area();\n}", ExtractionMode::Class);
/// assert!(!markup.contains("area"));
/// ```
pub fn render_with_mode(input: &str, mode: ExtractionMode) -> String {
    Orchestrator::new().process(input, Some(mode))
}

/// Build the PlantUML server URL for the diagram of `input`
///
/// # Example
/// ```rust
/// use umlify::{diagram_url, ServerConfig};
///
/// let url = diagram_url("class Foo {\n}", &ServerConfig::default()).unwrap();
/// assert!(url.starts_with("http://www.plantuml.com/plantuml/img/"));
/// ```
pub fn diagram_url(input: &str, server: &ServerConfig) -> anyhow::Result<String> {
    let config = PipelineConfig::new(ExtractionMode::Class, server.clone());
    Orchestrator::from_config(&config).diagram_url(input, None)
}
