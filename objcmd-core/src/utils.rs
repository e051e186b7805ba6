//! Shared string utilities for naming parameters and members.

/// Word separators recognised when title-casing a name.
const SEPARATORS: &[char] = &['_', '-', ' ', '.'];

/// Convert a string to PascalCase (e.g., "body_color" -> "BodyColor").
///
/// Only the first character of every word is changed; the rest of the word
/// keeps its casing, so already title-cased names pass through untouched
/// ("HoodColor" -> "HoodColor", "bodyColor" -> "BodyColor").
pub fn to_pascal_case(s: &str) -> String {
    s.split(SEPARATORS)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "BodyColor" -> "bodyColor")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Title-case every part and concatenate them (e.g., ["Color", "hex"] -> "ColorHex").
pub fn pascal_join<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(|p| to_pascal_case(p.as_ref())).collect()
}

/// Remove carriage returns and line feeds, keeping everything else verbatim.
pub fn strip_line_breaks(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("body-color"), "BodyColor");
        assert_eq!(to_pascal_case("bodyColor"), "BodyColor");
        assert_eq!(to_pascal_case("HoodColor"), "HoodColor");
        assert_eq!(to_pascal_case("x.ms.id"), "XMsId");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Car"), "car");
        assert_eq!(to_camel_case("BodyColor"), "bodyColor");
        assert_eq!(to_camel_case("virtual_machine"), "virtualMachine");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_pascal_join() {
        assert_eq!(pascal_join(&["BodyColor", "hex"]), "BodyColorHex");
        assert_eq!(pascal_join(&["car", "name"]), "CarName");
        assert_eq!(pascal_join::<&str>(&[]), "");
    }

    #[test]
    fn test_strip_line_breaks() {
        assert_eq!(strip_line_breaks("one\ntwo"), "onetwo");
        assert_eq!(strip_line_breaks("one\r\ntwo\n"), "onetwo");
        assert_eq!(strip_line_breaks("is it? yes"), "is it? yes");
    }
}
