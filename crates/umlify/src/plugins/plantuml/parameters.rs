//! Parameter list reformatting
//!
//! Methods keep their parameter list as raw source text. For the diagram,
//! each `Type name` piece is rewritten as `name : Type`.

use chumsky::prelude::*;
use tracing::warn;

/// A balanced `<...>` group, commas included
fn type_arguments<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    recursive(|nested| {
        just('<')
            .then(none_of("<>").ignored().or(nested).repeated())
            .then(just('>'))
            .ignored()
    })
}

/// A `"..."` literal such as an annotation argument, commas included
fn string_literal<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just('"')
        .then(none_of("\"").repeated())
        .then(just('"'))
        .ignored()
}

/// Split a raw parameter list on commas outside `<...>` and `"..."`
///
/// Produces one slice per parameter, untrimmed. Unbalanced angle brackets
/// or an unterminated string make the parse fail.
fn parameter_list_parser<'src>() -> impl Parser<'src, &'src str, Vec<&'src str>> {
    none_of(",<>\"")
        .ignored()
        .or(type_arguments())
        .or(string_literal())
        .repeated()
        .to_slice()
        .separated_by(just(','))
        .collect()
        .then_ignore(end())
}

/// Split `raw` into parameters, falling back to plain comma splitting
pub fn split_parameters(raw: &str) -> Vec<&str> {
    match parameter_list_parser().parse(raw).into_result() {
        Ok(pieces) => pieces,
        Err(_) => {
            warn!(parameters = raw, "Unbalanced type arguments or quotes; splitting on every comma");
            raw.split(',').collect()
        }
    }
}

/// Byte offset of the last whitespace character outside `<...>` and `"..."`
fn last_top_level_space(param: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quoted = false;
    let mut last = None;
    for (index, c) in param.char_indices() {
        match c {
            '"' => quoted = !quoted,
            _ if quoted => {}
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => last = Some(index),
            _ => {}
        }
    }
    last
}

/// Rewrite one trimmed `Type name` piece as `name : Type`
///
/// A piece with no separable name is returned unchanged.
pub fn format_parameter(param: &str) -> String {
    match last_top_level_space(param) {
        Some(index) => {
            let (param_type, name) = param.split_at(index);
            format!("{} : {}", name.trim(), param_type.trim())
        }
        None => {
            warn!(parameter = param, "Parameter has no separate name; emitted verbatim");
            param.to_string()
        }
    }
}

/// Rewrite a whole raw parameter list for display
///
/// Whitespace-only lists and empty pieces (such as after a trailing comma)
/// produce nothing.
pub fn format_parameters(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    split_parameters(raw)
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(format_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}
