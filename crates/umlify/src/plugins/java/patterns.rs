//! Line patterns recognized by the extractor
//!
//! Every pattern is matched against a single physical line and may match
//! anywhere inside it. Comments and string literals are not stripped first.

use regex::Regex;
use std::sync::LazyLock;

/// `class Name {` / `interface Name extends A, B {`
///
/// Groups: `kind`, `name`. The inheritance list is matched but not captured.
pub(super) static TYPE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<kind>class|interface)\s+(?P<name>\w+)(?:\s+(?:implements|extends)\s+[\w\s,]+)?\s*\{")
        .unwrap()
});

/// `private static int count = 0;`
///
/// Groups: `visibility`, `modifiers` (the whole keyword run), `type`, `name`.
pub(super) static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<visibility>public|private|protected)?\s*(?P<modifiers>(?:static\s+|final\s+|abstract\s+)*)(?P<type>\w+)\s+(?P<name>\w+)(?:\s*=\s*[^,;]+)?;",
    )
    .unwrap()
});

/// `public void run(int times) {`
///
/// Groups: `visibility`, `modifiers`, `return_type`, `name`, `params`,
/// `terminator`.
pub(super) static METHOD_WITH_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<visibility>public|private|protected)?\s*(?P<modifiers>(?:static\s+|final\s+|abstract\s+)*)(?P<return_type>\w+)\s+(?P<name>\w+)\s*\((?P<params>.*?)\)\s*(?P<terminator>\{)",
    )
    .unwrap()
});

/// Same as [`METHOD_WITH_BODY`] but also accepts `double area();`
pub(super) static METHOD_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<visibility>public|private|protected)?\s*(?P<modifiers>(?:static\s+|final\s+|abstract\s+)*)(?P<return_type>\w+)\s+(?P<name>\w+)\s*\((?P<params>.*?)\)\s*(?P<terminator>\{|;)",
    )
    .unwrap()
});
