//! Line-oriented structural extractor
//!
//! A single forward pass over the source, one physical line at a time. The
//! only state carried between lines is the current type and whether the
//! scanner believes it is inside a method body. This is a heuristic, not a
//! parser: multi-line declarations, nested braces and keywords inside
//! comments or strings are all handled (or mishandled) by the line patterns
//! alone.

use regex::{Captures, Regex};
use tracing::{debug, span, trace, Level};

use super::database::{AttributeRecord, ClassModel, MethodRecord};
use super::patterns::{ATTRIBUTE, METHOD_SIGNATURE, METHOD_WITH_BODY, TYPE_DECLARATION};
use crate::core::{ExtractionMode, Extractor, Modifier, TypeKind, Visibility};

/// State carried from one line to the next
#[derive(Debug, Default)]
struct ScanState {
    current_type: Option<String>,
    in_method_body: bool,
}

/// Extractor for Java-shaped source text
///
/// Both modes share this scanner; see [`ExtractionMode`] for what differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaExtractor {
    mode: ExtractionMode,
}

impl JavaExtractor {
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }

    /// Extractor that skips method bodies and needs `{` after signatures
    pub fn class_mode() -> Self {
        Self::new(ExtractionMode::Class)
    }

    /// Extractor that accepts `;`-terminated signatures and never skips lines
    pub fn interface_mode() -> Self {
        Self::new(ExtractionMode::Interface)
    }

    /// Extract a fresh model from `input`
    pub fn extract(&self, input: &str) -> ClassModel {
        let mut model = ClassModel::new();
        self.extract_into(input, &mut model);
        model
    }

    fn method_pattern(&self) -> &'static Regex {
        if self.mode.accepts_bodiless_signatures() {
            &*METHOD_SIGNATURE
        } else {
            &*METHOD_WITH_BODY
        }
    }

    fn scan_line(&self, line_no: usize, line: &str, state: &mut ScanState, model: &mut ClassModel) {
        if let Some(caps) = TYPE_DECLARATION.captures(line) {
            let kind = TypeKind::from_keyword(&caps["kind"]).unwrap_or(TypeKind::Class);
            let name = caps["name"].to_string();
            trace!(line = line_no, name = %name, kind = %kind, "Type declaration");
            model.declare(&name, kind);
            state.current_type = Some(name);
        }

        let Some(current_type) = state.current_type.as_deref() else {
            return;
        };

        if line.trim() == "}" {
            state.in_method_body = false;
        }

        let skips_bodies = self.mode.skips_method_bodies();
        let was_in_body = skips_bodies && state.in_method_body;

        // Where on this line an attribute may still be declared
        let mut attribute_scope = (!was_in_body).then_some(line);

        if let Some(caps) = self.method_pattern().captures(line) {
            if !was_in_body {
                if let Some(method) = method_from(&caps, current_type) {
                    trace!(line = line_no, type_name = current_type, method = %method.name, "Method");
                    if let Some(record) = model.get_mut(current_type) {
                        record.add_method(method);
                    }
                } else {
                    trace!(line = line_no, type_name = current_type, "Skipped constructor");
                }
            }

            if skips_bodies {
                // Text after the signature belongs to the body
                let start = caps.get(0).map_or(0, |m| m.start());
                attribute_scope = attribute_scope.map(|scope| &scope[..start]);
                if &caps["terminator"] == "{" {
                    state.in_method_body = true;
                }
            }
        }

        if let Some(caps) = attribute_scope.and_then(|scope| ATTRIBUTE.captures(scope)) {
            let attribute = attribute_from(&caps);
            trace!(line = line_no, type_name = current_type, attribute = %attribute.name, "Attribute");
            if let Some(record) = model.get_mut(current_type) {
                record.add_attribute(attribute);
            }
        }
    }
}

/// Build a method record, or `None` for a constructor of `current_type`
fn method_from(caps: &Captures<'_>, current_type: &str) -> Option<MethodRecord> {
    let name = &caps["name"];
    if name == current_type {
        return None;
    }
    Some(MethodRecord::new(
        Visibility::from_keyword(caps.name("visibility").map(|m| m.as_str())),
        Modifier::from_run(caps.name("modifiers").map(|m| m.as_str())),
        &caps["return_type"],
        name,
        &caps["params"],
    ))
}

fn attribute_from(caps: &Captures<'_>) -> AttributeRecord {
    AttributeRecord::new(
        Visibility::from_keyword(caps.name("visibility").map(|m| m.as_str())),
        Modifier::from_run(caps.name("modifiers").map(|m| m.as_str())),
        &caps["type"],
        &caps["name"],
    )
}

impl Extractor<ClassModel> for JavaExtractor {
    fn extract_into(&self, input: &str, database: &mut ClassModel) {
        let extract_span = span!(
            Level::INFO,
            "extract",
            mode = %self.mode,
            input_len = input.len()
        );
        let _enter = extract_span.enter();

        let mut state = ScanState::default();
        for (index, line) in input.lines().enumerate() {
            self.scan_line(index + 1, line, &mut state, database);
        }

        debug!(
            types = database.len(),
            attributes = database.attribute_count(),
            methods = database.method_count(),
            "Extraction finished"
        );
    }

    fn name(&self) -> &'static str {
        match self.mode {
            ExtractionMode::Class => "java-class",
            ExtractionMode::Interface => "java-interface",
        }
    }

    fn mode(&self) -> ExtractionMode {
        self.mode
    }

    fn can_extract(&self, input: &str) -> bool {
        input.lines().any(|line| TYPE_DECLARATION.is_match(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(input: &str) -> ClassModel {
        JavaExtractor::class_mode().extract(input)
    }

    fn interface(input: &str) -> ClassModel {
        JavaExtractor::interface_mode().extract(input)
    }

    #[test]
    fn test_empty_input() {
        assert!(class("").is_empty());
        assert!(interface("").is_empty());
    }

    #[test]
    fn test_no_type_declaration() {
        let model = class("int x;\nvoid run() {\n}\n");
        assert!(model.is_empty());
    }

    #[test]
    fn test_class_with_members() {
        let input = r#"public class Foo {
    private int bar;
    public void baz() {
        int x;
    }
}"#;
        let model = class(input);
        assert_eq!(model.len(), 1);

        let foo = model.get("Foo").unwrap();
        assert_eq!(foo.kind, TypeKind::Class);
        assert_eq!(foo.attributes.len(), 1);
        assert_eq!(foo.attributes[0].visibility, Visibility::Private);
        assert_eq!(foo.attributes[0].attr_type, "int");
        assert_eq!(foo.attributes[0].name, "bar");

        assert_eq!(foo.methods.len(), 1);
        assert_eq!(foo.methods[0].visibility, Visibility::Public);
        assert_eq!(foo.methods[0].name, "baz");
        assert_eq!(foo.methods[0].return_type, "void");
        assert_eq!(foo.methods[0].parameters, "");
    }

    #[test]
    fn test_class_single_line() {
        let model = class("public class Foo { private int bar; public void baz() { int x; } }");
        let foo = model.get("Foo").unwrap();
        assert_eq!(foo.attributes.len(), 1);
        assert_eq!(foo.attributes[0].name, "bar");
        assert_eq!(foo.methods.len(), 1);
        assert_eq!(foo.methods[0].name, "baz");
    }

    #[test]
    fn test_body_lines_are_not_attributes() {
        let input = r#"class Counter {
    private int count;
    public void increment() {
        int step = 1;
        count = count + step;
    }
    private String label;
}"#;
        let counter = class(input).get("Counter").cloned().unwrap();
        let names: Vec<_> = counter.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["count", "label"]);
    }

    #[test]
    fn test_nested_brace_ends_body_early() {
        // Any bare `}` line ends the body, including an inner block's.
        let input = r#"class Loop {
    void run() {
        if (ready) {
            int a;
        }
        int leaked;
    }
}"#;
        let model = class(input);
        let names: Vec<_> = model.get("Loop").unwrap().attributes.iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, vec!["leaked"]);
    }

    #[test]
    fn test_constructor_is_elided() {
        let input = r#"public class Point {
    private int x;
    public Point(int x) {
        int local;
    }
    public int getX() {
        return x;
    }
}"#;
        let point = class(input).get("Point").cloned().unwrap();
        let methods: Vec<_> = point.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["getX"]);
        // Constructor body is still skipped
        assert_eq!(point.attributes.len(), 1);
    }

    #[test]
    fn test_final_members_upper_cased() {
        let input = r#"class Door {
    private final int maxOpen = 3;
    public final void close() {
    }
    final void LOCK() {}
}"#;
        let door = class(input).get("Door").cloned().unwrap();
        assert_eq!(door.attributes[0].name, "MAXOPEN");
        assert_eq!(door.attributes[0].modifier, Modifier::Final);
        assert_eq!(door.methods[0].name, "CLOSE");
        assert_eq!(door.methods[1].name, "LOCK");
    }

    #[test]
    fn test_one_line_body_stays_open_until_bare_brace() {
        let input = "class Gate {\n    void open() {}\n    int hidden;\n    void shut() {\n}\n";
        let gate = class(input).get("Gate").cloned().unwrap();
        assert!(gate.attributes.is_empty());
        let methods: Vec<_> = gate.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["open"]);
    }

    #[test]
    fn test_only_first_modifier_is_kept() {
        let input = "class Limits {\n    public static final int MAX = 10;\n    final static int min = 1;\n}";
        let limits = class(input).get("Limits").cloned().unwrap();
        assert_eq!(limits.attributes[0].modifier, Modifier::Static);
        assert_eq!(limits.attributes[0].name, "MAX");
        assert_eq!(limits.attributes[1].modifier, Modifier::Final);
        assert_eq!(limits.attributes[1].name, "MIN");
    }

    #[test]
    fn test_class_mode_ignores_bodiless_signatures() {
        let input = "abstract class Shape {\n    public abstract double area();\n}";
        let shape = class(input).get("Shape").cloned().unwrap();
        assert!(shape.methods.is_empty());
        assert!(shape.attributes.is_empty());
    }

    #[test]
    fn test_interface_single_line() {
        let model = interface("public interface Shape { double area(); }");
        let shape = model.get("Shape").unwrap();
        assert_eq!(shape.kind, TypeKind::Interface);
        assert_eq!(shape.methods.len(), 1);
        assert_eq!(shape.methods[0].name, "area");
        assert_eq!(shape.methods[0].return_type, "double");
        assert_eq!(shape.methods[0].visibility, Visibility::Unspecified);
    }

    #[test]
    fn test_interface_mode_reads_body_lines() {
        let input = r#"class Counter {
    public void increment() {
        int step = 1;
    }
}"#;
        let counter = interface(input).get("Counter").cloned().unwrap();
        assert_eq!(counter.methods.len(), 1);
        assert_eq!(counter.attributes.len(), 1);
        assert_eq!(counter.attributes[0].name, "step");
    }

    #[test]
    fn test_interface_mode_constructor_elided() {
        let input = "class Box {\n    public Box(int size);\n    int size();\n}";
        let boxed = interface(input).get("Box").cloned().unwrap();
        assert_eq!(boxed.methods.len(), 1);
        assert_eq!(boxed.methods[0].name, "size");
    }

    #[test]
    fn test_inheritance_not_retained() {
        let model = class("public class Dog extends Animal implements Pet {\n}");
        let names: Vec<_> = model.names().collect();
        assert_eq!(names, vec!["Dog"]);
    }

    #[test]
    fn test_duplicate_type_last_wins() {
        let input = "class A {\n    int first;\n}\nclass B {\n}\nclass A {\n    int second;\n}";
        let model = class(input);
        let names: Vec<_> = model.names().collect();
        assert_eq!(names, vec!["A", "B"]);
        let a = model.get("A").unwrap();
        assert_eq!(a.attributes.len(), 1);
        assert_eq!(a.attributes[0].name, "second");
    }

    #[test]
    fn test_multi_line_declaration_not_recognized() {
        let input = "class Wide {\n    public void draw(int x,\n                     int y) {\n    }\n}";
        let wide = class(input).get("Wide").cloned().unwrap();
        assert!(wide.methods.is_empty());
    }

    #[test]
    fn test_comments_are_not_stripped() {
        let input = "// class Ghost {\nclass Real {\n}";
        let names: Vec<_> = class(input).names().map(str::to_string).collect();
        assert_eq!(names, vec!["Ghost", "Real"]);
    }

    #[test]
    fn test_members_before_any_type_ignored() {
        let input = "int orphan;\nclass A {\n    int kept;\n}";
        let model = class(input);
        assert_eq!(model.attribute_count(), 1);
    }

    #[test]
    fn test_crlf_input() {
        let model = class("class A {\r\n    private int x;\r\n}\r\n");
        assert_eq!(model.get("A").unwrap().attributes[0].name, "x");
    }

    #[test]
    fn test_extractor_trait() {
        let extractor = JavaExtractor::interface_mode();
        assert_eq!(extractor.name(), "java-interface");
        assert_eq!(extractor.mode(), ExtractionMode::Interface);
        assert!(extractor.can_extract("interface A {"));
        assert!(!extractor.can_extract("int x;"));
    }
}
