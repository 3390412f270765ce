//! Core detector trait for extraction mode selection
//!
//! Each extraction mode ships a detector that scores how well a document
//! suits it. The orchestrator runs them all and keeps the best score.

use super::ExtractionMode;

/// Core trait for extraction mode detectors
///
/// # Example
/// ```
/// use umlify::core::Detector;
/// use umlify::plugins::java::InterfaceDetector;
///
/// let detector = InterfaceDetector::new();
/// assert!(detector.detect("public interface Shape {\n  double area();\n}"));
/// ```
pub trait Detector: Send + Sync {
    /// Detect if the input suits this detector's mode
    fn detect(&self, input: &str) -> bool;

    /// Get the confidence level of the detection (0.0 to 1.0)
    fn confidence(&self, input: &str) -> f64;

    /// The mode this detector recommends
    fn mode(&self) -> ExtractionMode;

    /// Get key patterns that this detector looks for
    fn patterns(&self) -> Vec<&'static str>;
}
