//! Name normalisation for path segments.
//!
//! Export sub-paths use kebab-case directory and file segments. Entity
//! names arrive in whatever case the user typed (`UserProfile`,
//! `user_profile`), so they pass through [`to_kebab_case`] before being
//! turned into a path.

/// Convert a string to kebab-case.
///
/// | Input | Output |
/// |-------|--------|
/// | "UserProfile" | "user-profile" |
/// | "user_profile" | "user-profile" |
/// | "HTTPRequest" | "http-request" |
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Split a string into lowercase words.
///
/// Boundaries:
/// 1. `_`, `-`, `/`, `.` and whitespace always split
/// 2. lowercase followed by uppercase (`myApp` -> `my` `app`)
/// 3. an acronym followed by a word (`HTTPServer` -> `http` `server`)
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c == '/' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

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
    fn kebab_from_pascal() {
        assert_eq!(to_kebab_case("UserProfile"), "user-profile");
    }

    #[test]
    fn kebab_from_snake_and_spaces() {
        assert_eq!(to_kebab_case("user_profile"), "user-profile");
        assert_eq!(to_kebab_case("order  line item"), "order-line-item");
    }

    #[test]
    fn kebab_handles_acronyms() {
        assert_eq!(to_kebab_case("HTTPRequest"), "http-request");
        assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
    }

    #[test]
    fn kebab_is_idempotent() {
        assert_eq!(to_kebab_case("find-by-id"), "find-by-id");
    }
}
