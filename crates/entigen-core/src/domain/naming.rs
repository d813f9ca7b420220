//! Identifier case conversion for paths, type names and i18n keys.
//!
//! Entity names arrive in PascalCase but surface in several shapes across the
//! generated tree: `FooBar` becomes `foo_bar_repository.rs` on the server,
//! `foo-bar` as a client folder, and `sampleServiceFooBar` as an i18n key
//! when namespaced under a client root folder. All of those derivations go
//! through the word splitter below so the shapes stay consistent.

/// Convert to snake_case (server file names).
pub fn snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert to kebab-case (client folder and file names).
pub fn kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert to PascalCase (entity identity, generated type names).
pub fn pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| upper_first(w)).collect()
}

/// Convert to camelCase (i18n keys, client identifiers).
pub fn camel_case(s: &str) -> String {
    lower_first(&pascal_case(s))
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split an identifier into lowercase words.
///
/// Boundaries: explicit separators (`_`, `-`, whitespace), camelCase
/// transitions (`aB`), and acronym edges (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // camelCase transition: "myEntity" → "my" + "Entity"
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Acronym edge: "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_from_pascal() {
        assert_eq!(snake_case("FooBar"), "foo_bar");
        assert_eq!(snake_case("Foo"), "foo");
    }

    #[test]
    fn kebab_joins_mixed_input() {
        assert_eq!(kebab_case("FooManagement"), "foo-management");
        assert_eq!(kebab_case("test-root"), "test-root");
    }

    #[test]
    fn pascal_normalizes_any_shape() {
        assert_eq!(pascal_case("foo"), "Foo");
        assert_eq!(pascal_case("foo-bar"), "FooBar");
        assert_eq!(pascal_case("foo_bar"), "FooBar");
        assert_eq!(pascal_case("FooBar"), "FooBar");
    }

    #[test]
    fn camel_keeps_inner_caps() {
        assert_eq!(camel_case("sampleMicroservice"), "sampleMicroservice");
        assert_eq!(camel_case("test-root"), "testRoot");
    }

    #[test]
    fn acronyms_split_cleanly() {
        assert_eq!(snake_case("HTTPRequest"), "http_request");
        assert_eq!(pascal_case("XMLHttpRequest"), "XmlHttpRequest");
    }

    #[test]
    fn first_letter_helpers() {
        assert_eq!(lower_first("Foo"), "foo");
        assert_eq!(upper_first("foo"), "Foo");
        assert_eq!(lower_first(""), "");
        assert_eq!(upper_first(""), "");
    }
}
