//! Identifier sanitization for generated sources
//!
//! Every name that reaches the output goes through [`sanitize`], which turns
//! an arbitrary model spelling into either a legal bare identifier or a
//! backtick-quoted one.

/// Replacement for `$`, which the target grammar does not accept
pub const DOLLAR_REPLACEMENT: &str = "___";

/// Appended to forbidden keywords. Shared with the sibling backend so both
/// produce the same spelling for the same reserved name.
pub const FORBIDDEN_KEYWORD_SUFFIX: &str = "__";

/// Reserved words usable only when quoted
pub const HARD_KEYWORDS: &[&str] = &[
    "as",
    "break",
    "class",
    "continue",
    "do",
    "else",
    "false",
    "for",
    "fun",
    "if",
    "in",
    "interface",
    "is",
    "null",
    "object",
    "package",
    "return",
    "super",
    "this",
    "throw",
    "true",
    "try",
    "typealias",
    "typeof",
    "val",
    "var",
    "when",
    "while",
];

/// Reserved words the interop exporter rejects even when quoted
pub const FORBIDDEN_KEYWORDS: &[&str] = &["alloc", "class", "init", "mutableCopy", "new", "self"];

pub fn is_hard_keyword(name: &str) -> bool {
    HARD_KEYWORDS.contains(&name)
}

pub fn is_forbidden_keyword(name: &str) -> bool {
    FORBIDDEN_KEYWORDS.contains(&name)
}

/// Render a raw name as a safe identifier
///
/// `$` becomes `___`. Forbidden keywords get `__` appended; hard keywords
/// and names outside the identifier grammar are wrapped in backticks.
///
/// The `$` replacement is lossy: `a$b` and `a___b` sanitize to the same
/// spelling.
///
/// ```
/// use crossname_codegen::identifier::sanitize;
/// assert_eq!(sanitize("m_count"), "m_count");
/// assert_eq!(sanitize("class"), "class__");
/// assert_eq!(sanitize("object"), "`object`");
/// assert_eq!(sanitize("access$000"), "access___000");
/// assert_eq!(sanitize("2d"), "`2d`");
/// ```
pub fn sanitize(raw: &str) -> String {
    let replaced = raw.replace('$', DOLLAR_REPLACEMENT);
    if is_forbidden_keyword(&replaced) {
        replaced + FORBIDDEN_KEYWORD_SUFFIX
    } else if is_hard_keyword(&replaced) || !is_valid_identifier(&replaced) {
        format!("`{}`", replaced)
    } else {
        replaced
    }
}

/// Sanitize each segment of a dotted name and rejoin with `.`
pub fn qualified_identifier(qualified_name: &str) -> String {
    qualified_name
        .split('.')
        .map(sanitize)
        .collect::<Vec<_>>()
        .join(".")
}

/// Package names are rendered segment by segment
pub fn package_name(package_name: &str) -> String {
    qualified_identifier(package_name)
}

/// First char is a letter or `_`; the rest are letters, digits or `_`
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => false,
        Some(first) => is_identifier_start(first) && chars.all(is_identifier_char),
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_identifier_start(c: char) -> bool {
    is_identifier_char(c) && !c.is_numeric()
}
