//! Custom Tera filters.
//!
//! `swift_string` escapes text for the inside of a Swift string literal.
//! The case filters rename keywords into identifiers; the bundled template
//! only needs `pascal_case`, the others are there for custom templates.

use std::collections::HashMap;

use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use tera::{Result, Value};

pub(crate) fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake_case filter expects a string"))?;
    Ok(Value::String(s.to_snake_case()))
}

pub(crate) fn pascal_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("pascal_case filter expects a string"))?;
    Ok(Value::String(s.to_pascal_case()))
}

pub(crate) fn camel_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("camel_case filter expects a string"))?;
    Ok(Value::String(s.to_lower_camel_case()))
}

/// Escape `value` for use between the quotes of a Swift string literal.
pub(crate) fn swift_string(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("swift_string filter expects a string"))?;
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => escaped.push(c),
        }
    }
    Ok(Value::String(escaped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(filter: fn(&Value, &HashMap<String, Value>) -> Result<Value>, input: &str) -> String {
        let val = Value::String(input.to_string());
        let args = HashMap::new();
        filter(&val, &args).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(apply(snake_case, "textButton"), "text_button");
        assert_eq!(apply(snake_case, "TextButton"), "text_button");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(apply(pascal_case, "textButton"), "TextButton");
        assert_eq!(apply(pascal_case, "text_button"), "TextButton");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(apply(camel_case, "TextButton"), "textButton");
        assert_eq!(apply(camel_case, "text-button"), "textButton");
    }

    #[test]
    fn test_swift_string() {
        assert_eq!(apply(swift_string, "Submit"), "Submit");
        assert_eq!(
            apply(swift_string, "Say \"hi\"\nnow \\o/"),
            r#"Say \"hi\"\nnow \\o/"#
        );
        assert_eq!(apply(swift_string, "a\tb\r"), r"a\tb\r");
        assert_eq!(apply(swift_string, "bell\u{7}"), r"bell\u{7}");
        assert_eq!(apply(swift_string, "Café ✓"), "Café ✓");
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let val = Value::Number(42.into());
        let args = HashMap::new();
        assert!(pascal_case(&val, &args).is_err());
    }
}
