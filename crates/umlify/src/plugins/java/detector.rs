//! Extraction mode detectors
//!
//! Score how well a source document suits each extraction mode.

use super::patterns::{METHOD_SIGNATURE, METHOD_WITH_BODY, TYPE_DECLARATION};
use crate::core::{Detector, ExtractionMode};

/// Words that open statements shaped like `word name(...);`
const STATEMENT_KEYWORDS: &[&str] = &["return", "new", "throw", "else", "case", "yield"];

/// Whether any line declares a type of the given keyword
fn declares(input: &str, keyword: &str) -> bool {
    input.lines().any(|line| {
        TYPE_DECLARATION
            .captures_iter(line)
            .any(|caps| &caps["kind"] == keyword)
    })
}

/// Whether any line holds a method signature ending in `;`
fn has_bodiless_signature(input: &str) -> bool {
    input.lines().any(|line| {
        METHOD_SIGNATURE.captures_iter(line).any(|caps| {
            &caps["terminator"] == ";" && !STATEMENT_KEYWORDS.contains(&&caps["return_type"])
        })
    })
}

/// Whether any line opens a method or constructor body
///
/// Interface mode reads body lines as members, so any body rules it out.
fn has_method_body(input: &str) -> bool {
    input.lines().any(|line| {
        METHOD_WITH_BODY
            .captures_iter(line)
            .any(|caps| !STATEMENT_KEYWORDS.contains(&&caps["return_type"]))
    })
}

/// Detector recommending class mode
pub struct ClassDetector;

impl ClassDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ClassDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) > 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        if declares(input, "class") {
            return 0.8;
        }
        0.0
    }

    fn mode(&self) -> ExtractionMode {
        ExtractionMode::Class
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["class Name {"]
    }
}

/// Detector recommending interface mode
///
/// Fires on interface declarations and on bodiless signatures such as
/// abstract methods, which class mode would drop. A document holding any
/// method body scores zero, whatever else it declares.
pub struct InterfaceDetector;

impl InterfaceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InterfaceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for InterfaceDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) > 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        if has_method_body(input) {
            return 0.0;
        }
        if declares(input, "interface") {
            return 0.9;
        }
        if declares(input, "class") && has_bodiless_signature(input) {
            return 0.85;
        }
        0.0
    }

    fn mode(&self) -> ExtractionMode {
        ExtractionMode::Interface
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["interface Name {", "Type name(params);"]
    }
}
