//! Java-like source plugin
//!
//! Line-oriented extraction of classes, interfaces and their members.

mod database;
mod detector;
mod extractor;
mod patterns;

pub use database::{AttributeRecord, ClassModel, MethodRecord, TypeRecord};
pub use detector::{ClassDetector, InterfaceDetector};
pub use extractor::JavaExtractor;
