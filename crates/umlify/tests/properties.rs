//! Property tests for extraction and generation

use proptest::prelude::*;
use umlify::plugins::plantuml::{PREAMBLE, TERMINATOR};
use umlify::{extract_with_mode, generate, render, ExtractionMode, Modifier};

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}"
}

fn member_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

fn mode() -> impl Strategy<Value = ExtractionMode> {
    prop_oneof![Just(ExtractionMode::Class), Just(ExtractionMode::Interface)]
}

proptest! {
    #[test]
    fn generation_is_deterministic(source in "[ -~\n]{0,200}") {
        prop_assert_eq!(render(&source), render(&source));
    }

    #[test]
    fn markup_is_always_framed(source in "[ -~\n]{0,200}", mode in mode()) {
        let markup = generate(&extract_with_mode(&source, mode));
        prop_assert!(markup.starts_with(PREAMBLE));
        prop_assert!(markup.ends_with(TERMINATOR));
        prop_assert!(!markup.ends_with('\n'));
    }

    #[test]
    fn sources_without_declarations_are_empty(source in "[a-z ;=(){}\n]{0,200}", mode in mode()) {
        prop_assume!(!source.contains("class") && !source.contains("interface"));
        prop_assert!(extract_with_mode(&source, mode).is_empty());
    }

    #[test]
    fn constructors_never_appear(name in identifier(), other in member_name(), mode in mode()) {
        let source = format!(
            "class {name} {{\n    public {name}(int x) {{\n    }}\n    public void {other}() {{\n    }}\n}}"
        );
        let model = extract_with_mode(&source, mode);
        let record = model.get(&name).unwrap();
        prop_assert!(record.methods.iter().all(|m| m.name != name));
        prop_assert_eq!(record.methods.len(), 1);
    }

    #[test]
    fn final_members_are_upper_case(ty in identifier(), name in member_name(), mode in mode()) {
        let source = format!("class Holder {{\n    private final {ty} {name};\n}}");
        let model = extract_with_mode(&source, mode);
        let attribute = &model.get("Holder").unwrap().attributes[0];
        prop_assert_eq!(attribute.modifier, Modifier::Final);
        prop_assert_eq!(&attribute.name, &name.to_uppercase());
    }

    #[test]
    fn upper_casing_is_idempotent(name in member_name()) {
        let once = extract_with_mode(
            &format!("class H {{\n    final int {name};\n}}"),
            ExtractionMode::Class,
        );
        let upper = once.get("H").unwrap().attributes[0].name.clone();
        let twice = extract_with_mode(
            &format!("class H {{\n    final int {upper};\n}}"),
            ExtractionMode::Class,
        );
        prop_assert_eq!(&twice.get("H").unwrap().attributes[0].name, &upper);
    }

    #[test]
    fn one_block_per_type(names in prop::collection::hash_set(identifier(), 1..6)) {
        let source: String = names
            .iter()
            .map(|name| format!("class {name} {{\n}}\n"))
            .collect();
        let markup = render(&source);
        prop_assert_eq!(markup.matches("class ").count(), names.len());
        prop_assert_eq!(markup.matches("}\n").count(), names.len());
    }
}
