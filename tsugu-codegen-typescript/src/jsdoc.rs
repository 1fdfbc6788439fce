//! JSDoc comment builder.
//!
//! Formats description, deprecation, and example metadata into one comment
//! block. Emitters attach the result as a [`CodeFragment::JsDoc`] right
//! before the declaration it documents.

use serde_json::Value;
use tsugu_codegen::CodeFragment;

/// Fixed message used when a deprecated entry carries no note of its own.
pub const DEPRECATION_MESSAGE: &str =
    "This operation is deprecated and may be removed in a future release.";

/// Builder for one JSDoc block.
#[derive(Debug, Clone, Default)]
pub struct DocComment {
    description: Option<String>,
    deprecated: Option<String>,
    example: Option<Value>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, text: Option<&str>) -> Self {
        self.description = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);
        self
    }

    /// Mark deprecated, with the given note or the fixed fallback message.
    pub fn deprecated(mut self, flag: bool, note: Option<&str>) -> Self {
        if flag {
            self.deprecated = Some(note.unwrap_or(DEPRECATION_MESSAGE).to_string());
        }
        self
    }

    pub fn example(mut self, value: Option<&Value>) -> Self {
        self.example = value.cloned();
        self
    }

    /// Build the comment text, or `None` when there is nothing to document.
    pub fn text(&self) -> Option<String> {
        let mut lines: Vec<String> = Vec::new();

        if let Some(description) = &self.description {
            lines.extend(description.lines().map(String::from));
        }
        if let Some(note) = &self.deprecated {
            lines.push(format!("@deprecated {}", note));
        }
        if let Some(example) = &self.example {
            lines.push(format!("@example {}", render_example(example)));
        }

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// Build the comment as a fragment, when there is content.
    pub fn fragment(&self) -> Option<CodeFragment> {
        self.text().map(CodeFragment::JsDoc)
    }
}

fn render_example(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
