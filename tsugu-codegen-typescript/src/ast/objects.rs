//! Inline object literal builder.

use serde_json::Value;

use crate::naming::object_key;

/// Builder for inline JavaScript object literals (`{ a: 1, b: x }`).
///
/// Used for operation call options and path-template argument maps, where
/// the literal stays on one line inside a call expression.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    entries: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with a raw (unquoted) expression value.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Add an entry rendering a JSON value as its JavaScript literal.
    pub fn json(self, key: impl Into<String>, value: &Value) -> Self {
        self.raw(key, json_literal(value))
    }

    /// Add a shorthand entry (`{ id }`) when key and expression match,
    /// falling back to an explicit pair otherwise.
    pub fn shorthand_or_pair(mut self, key: impl Into<String>, expr: impl Into<String>) -> Self {
        let key = key.into();
        let expr = expr.into();
        if key == expr {
            self.entries.push((key, String::new()));
        } else {
            self.entries.push((key, expr));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a single-line literal.
    pub fn build_inline(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }

        let rendered: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    object_key(key)
                } else {
                    format!("{}: {}", object_key(key), value)
                }
            })
            .collect();

        format!("{{ {} }}", rendered.join(", "))
    }
}

/// Render a JSON value as a JavaScript literal.
pub fn json_literal(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", object_key(k), json_literal(v)))
                .collect();
            if entries.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {} }}", entries.join(", "))
            }
        }
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(json_literal).collect();
            format!("[{}]", rendered.join(", "))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build_inline(), "{}");
    }

    #[test]
    fn test_raw_entries() {
        let o = JsObject::new()
            .raw("headers", "headerParams")
            .raw("retries", "3");
        assert_eq!(o.build_inline(), "{ headers: headerParams, retries: 3 }");
    }

    #[test]
    fn test_shorthand_collapses_matching_names() {
        let o = JsObject::new()
            .shorthand_or_pair("id", "id")
            .shorthand_or_pair("pet-id", "petId");
        assert_eq!(o.build_inline(), "{ id, \"pet-id\": petId }");
    }

    #[test]
    fn test_json_literal() {
        assert_eq!(json_literal(&json!("a")), "\"a\"");
        assert_eq!(json_literal(&json!(2)), "2");
        assert_eq!(json_literal(&json!(true)), "true");
        assert_eq!(
            json_literal(&json!({"content-type": "text/plain"})),
            "{ \"content-type\": \"text/plain\" }"
        );
        assert_eq!(json_literal(&json!([1, 2])), "[1, 2]");
    }
}
