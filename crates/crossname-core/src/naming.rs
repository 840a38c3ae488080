//! Shared case helpers for interop name derivation.
//!
//! These functions only touch the first character or a camel-case word
//! boundary. They never try to guess word boundaries inside an all-lowercase
//! or all-uppercase name.

/// Uppercase the first character and keep the rest untouched
///
/// # Examples
/// ```
/// use crossname_core::naming::title_case;
/// assert_eq!(title_case("vec2"), "Vec2");
/// assert_eq!(title_case("jbox2d"), "Jbox2d");
/// assert_eq!(title_case("ObjectMeta"), "ObjectMeta");
/// assert_eq!(title_case("pDLL"), "PDLL");
/// ```
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Whether `name` begins with the camel-case word `prefix`
///
/// The prefix is compared ignoring ASCII case and must end at a word
/// boundary: the end of the string or a character that is not lowercase.
///
/// # Examples
/// ```
/// use crossname_core::naming::camel_case_starts_with;
/// assert!(camel_case_starts_with("newValue", "new"));
/// assert!(camel_case_starts_with("new", "new"));
/// assert!(camel_case_starts_with("NewValue", "new"));
/// assert!(!camel_case_starts_with("newton", "new"));
/// assert!(!camel_case_starts_with("ne", "new"));
/// ```
pub fn camel_case_starts_with(name: &str, prefix: &str) -> bool {
    let Some(head) = name.get(..prefix.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(prefix) {
        return false;
    }
    name[prefix.len()..]
        .chars()
        .next()
        .map_or(true, |next| !next.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("a"), "A");
        assert_eq!(title_case("org"), "Org");
        assert_eq!(title_case("Body"), "Body");
        assert_eq!(title_case("_hidden"), "_hidden");
        assert_eq!(title_case("ärger"), "Ärger");
    }

    #[test]
    fn test_camel_case_starts_with() {
        assert!(camel_case_starts_with("copyOf", "copy"));
        assert!(camel_case_starts_with("alloc_count", "alloc"));
        assert!(camel_case_starts_with("initValue", "init"));
        assert!(camel_case_starts_with("mutableCopyFlag", "mutableCopy"));
        assert!(camel_case_starts_with("INIT", "init"));

        assert!(!camel_case_starts_with("initial", "init"));
        assert!(!camel_case_starts_with("copyright", "copy"));
        assert!(!camel_case_starts_with("", "new"));
        assert!(!camel_case_starts_with("renew", "new"));
    }

    #[test]
    fn test_camel_case_starts_with_multibyte() {
        // Prefix length lands inside a multi-byte character
        assert!(!camel_case_starts_with("nä", "new"));
        assert!(!camel_case_starts_with("neä", "new"));
    }
}
