//! Import statement builder.

use tsugu_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for a named import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import every name from an iterator.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_kw = if self.type_only { "type " } else { "" };

        if self.named.is_empty() {
            return vec![CodeFragment::Line(format!(
                "import \"{}\";",
                self.from
            ))];
        }

        vec![CodeFragment::Line(format!(
            "import {}{{ {} }} from \"{}\";",
            type_kw,
            self.named.join(", "),
            self.from
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("./httpRequest")
            .named("Http")
            .named("template")
            .build();
        assert_eq!(i, "import { Http, template } from \"./httpRequest\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("./types")
            .named_all(["Pet", "Order"])
            .type_only()
            .build();
        assert_eq!(i, "import type { Pet, Order } from \"./types\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";\n");
    }
}
