//! Integration tests for the public API

use umlify::prelude::*;
use umlify::{
    diagram_url, extract, extract_auto, extract_with_mode, generate, render, render_auto,
    render_with_mode,
};

const FOO_SINGLE_LINE: &str = "public class Foo { private int bar; public void baz() { int x; } }";

const FOO_MULTI_LINE: &str = r#"public class Foo {
    private int bar;
    public void baz() {
        int x;
    }
}"#;

const FOO_MARKUP: &str = "skinparam classAttributeIconSize 0\n@startuml\nclass Foo {\n    - bar : int\n    + baz() : void\n}\n@enduml";

#[test]
fn test_render_single_line_class() {
    assert_eq!(render(FOO_SINGLE_LINE), FOO_MARKUP);
}

#[test]
fn test_render_multi_line_class() {
    assert_eq!(render(FOO_MULTI_LINE), FOO_MARKUP);
}

#[test]
fn test_render_interface() {
    let markup = render_with_mode("public interface Shape { double area(); }", ExtractionMode::Interface);
    assert_eq!(
        markup,
        "skinparam classAttributeIconSize 0\n@startuml\ninterface Shape {\n    + area() : double\n}\n@enduml"
    );
}

#[test]
fn test_final_method_in_door() {
    let input = "public class Door {\n    final void lock() {\n    }\n}";
    let model = extract(input);
    let door = model.get("Door").unwrap();
    assert_eq!(door.methods[0].name, "LOCK");
    assert_eq!(door.methods[0].modifier, Modifier::Final);
    assert!(render(input).contains("    + LOCK() : void\n"));
}

#[test]
fn test_extract_model_contents() {
    let model = extract(FOO_MULTI_LINE);
    assert_eq!(model.names().collect::<Vec<_>>(), vec!["Foo"]);

    let foo = model.get("Foo").unwrap();
    assert_eq!(foo.kind, TypeKind::Class);
    assert_eq!(
        foo.attributes,
        vec![AttributeRecord::new(
            Visibility::Private,
            Modifier::None,
            "int",
            "bar"
        )]
    );
    assert_eq!(
        foo.methods,
        vec![MethodRecord::new(
            Visibility::Public,
            Modifier::None,
            "void",
            "baz",
            ""
        )]
    );
}

#[test]
fn test_generate_after_extract() {
    let model = extract_with_mode(FOO_MULTI_LINE, ExtractionMode::Class);
    assert_eq!(generate(&model), FOO_MARKUP);
}

#[test]
fn test_render_with_mode_differs_on_abstract_class() {
    let input = "public abstract class Shape {\n    protected String name;\n    public abstract double area();\n}";

    let class_markup = render_with_mode(input, ExtractionMode::Class);
    assert!(!class_markup.contains("area"));

    let interface_markup = render_with_mode(input, ExtractionMode::Interface);
    assert!(interface_markup.contains("    + {abstract} area() : double\n"));
    assert!(interface_markup.contains("    # name : String\n"));
}

#[test]
fn test_render_uses_class_mode() {
    let input = "public abstract class Shape {\n    public abstract double area();\n}";
    assert_eq!(render(input), render_with_mode(input, ExtractionMode::Class));
}

#[test]
fn test_auto_mode_picks_interface_for_abstract_signatures() {
    let input = "public abstract class Shape {\n    public abstract double area();\n}";
    assert_eq!(
        render_auto(input),
        render_with_mode(input, ExtractionMode::Interface)
    );
}

const MARKER_AND_FOO: &str = r#"interface Marker {
}
public class Foo {
    private int bar;
    public void baz() {
        int x;
    }
}"#;

const RETRYING: &str = r#"public abstract class Retrying {
    private int limit;
    public void run() {
        int attempts = 0;
    }
    abstract void hook();
}"#;

#[test]
fn test_declared_interface_does_not_expose_method_locals() {
    for model in [extract(MARKER_AND_FOO), extract_auto(MARKER_AND_FOO)] {
        let foo = model.get("Foo").unwrap();
        let names: Vec<_> = foo.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["bar"]);
    }
    assert!(!render(MARKER_AND_FOO).contains("+ x : int"));
    assert!(!render_auto(MARKER_AND_FOO).contains("+ x : int"));
}

#[test]
fn test_abstract_hook_does_not_expose_method_locals() {
    assert!(!render(RETRYING).contains("attempts"));
    assert!(!render_auto(RETRYING).contains("attempts"));
    assert!(render(RETRYING).contains("    - limit : int\n"));
    assert!(render(RETRYING).contains("    + run() : void\n"));
}

#[test]
fn test_component_pipeline() {
    let extractor = JavaExtractor::class_mode();
    assert!(extractor.can_extract(FOO_MULTI_LINE));
    assert_eq!(extractor.name(), "java-class");

    let mut model = ClassModel::new();
    extractor.extract_into(FOO_MULTI_LINE, &mut model);
    assert_eq!(model.record_count(), 1);

    let generator = PlantUmlGenerator::new();
    assert_eq!(generator.generate(&model), FOO_MARKUP);
}

#[test]
fn test_orchestrator_round_trip_to_url() {
    let server = PlantUmlServer::new(ServerConfig::new("http://localhost:8080", ImageFormat::Svg));
    let orchestrator = Orchestrator::new().with_service(Box::new(server));

    let url = orchestrator.diagram_url(FOO_MULTI_LINE, None).unwrap();
    assert!(url.starts_with("http://localhost:8080/svg/"));

    let encoded = url.rsplit('/').next().unwrap();
    assert_eq!(encoded.len() % 4, 0);
    assert_eq!(
        encoded,
        umlify::plugins::plantuml::encode_markup(FOO_MARKUP).unwrap()
    );
}

#[test]
fn test_diagram_url_default_server() {
    let url = diagram_url(FOO_SINGLE_LINE, &ServerConfig::default()).unwrap();
    assert!(url.starts_with("http://www.plantuml.com/plantuml/img/"));
}

#[test]
fn test_pipeline_config_serde() {
    let config = PipelineConfig::new(ExtractionMode::Interface, ServerConfig::default()).with_auto_detect();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"interface\""));

    let back: PipelineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
