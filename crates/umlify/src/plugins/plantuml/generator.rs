//! PlantUML class diagram generator
//!
//! Emits one `class`/`interface` block per type in model order, followed by
//! its attributes and then its methods.

use tracing::{debug, span, Level};

use super::parameters::format_parameters;
use crate::core::{Database, Generator};
use crate::plugins::java::{AttributeRecord, ClassModel, MethodRecord};

/// Markup emitted before any type block
///
/// The `skinparam` line turns off PlantUML's per-member visibility icons so
/// the `+ - #` symbols are printed as text.
pub const PREAMBLE: &str = "skinparam classAttributeIconSize 0\n@startuml\n";

/// Markup closing the diagram
pub const TERMINATOR: &str = "@enduml";

const MEMBER_INDENT: &str = "    ";

/// Generator producing PlantUML class diagram markup
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlGenerator;

impl PlantUmlGenerator {
    pub fn new() -> Self {
        Self
    }

    /// `- name : type`, with `{static} ` before static names
    pub fn attribute_line(attribute: &AttributeRecord) -> String {
        format!(
            "{}{} {}{} : {}",
            MEMBER_INDENT,
            attribute.visibility.symbol(),
            attribute.modifier.attribute_marker(),
            attribute.name,
            attribute.attr_type
        )
    }

    /// `+ name(p : T, ...) : ret`, with `{static} ` or `{abstract} ` markers
    pub fn method_line(method: &MethodRecord) -> String {
        format!(
            "{}{} {}{}({}) : {}",
            MEMBER_INDENT,
            method.visibility.symbol(),
            method.modifier.method_marker(),
            method.name,
            format_parameters(&method.parameters),
            method.return_type
        )
    }
}

impl Generator<ClassModel> for PlantUmlGenerator {
    type Output = String;

    fn generate(&self, database: &ClassModel) -> String {
        let generate_span = span!(Level::INFO, "generate", types = database.record_count());
        let _enter = generate_span.enter();

        let mut markup = String::from(PREAMBLE);

        for (name, record) in database.records() {
            markup.push_str(&format!("{} {} {{\n", record.kind, name));
            for attribute in &record.attributes {
                markup.push_str(&Self::attribute_line(attribute));
                markup.push('\n');
            }
            for method in &record.methods {
                markup.push_str(&Self::method_line(method));
                markup.push('\n');
            }
            markup.push_str("}\n");
        }

        markup.push_str(TERMINATOR);

        debug!(bytes = markup.len(), "Generated PlantUML markup");
        markup
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn format(&self) -> &'static str {
        "plantuml"
    }
}
