//! Code builder: turns fragments into properly indented text.

use super::{CodeFragment, Indent, Renderable};

/// Fluent printer for building indented code.
///
/// # Example
///
/// ```
/// use tsugu_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("function greet() {")
///     .indent()
///     .line("return \"hi\";")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function greet() {\n  return \"hi\";\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or a trailing newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a JSDoc comment. Multi-line text renders as a starred block.
    pub fn jsdoc(mut self, text: &str) -> Self {
        if text.contains('\n') {
            self = self.line("/**");
            for doc_line in text.lines() {
                self = if doc_line.is_empty() {
                    self.line(" *")
                } else {
                    self.line(&format!(" * {}", doc_line))
                };
            }
            self.line(" */")
        } else {
            self.line(&format!("/** {} */", text))
        }
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(self, node: &impl Renderable) -> Self {
        node.to_fragments()
            .into_iter()
            .fold(self, |b, fragment| b.apply_fragment(fragment))
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(self, fragment: CodeFragment) -> Self {
        match fragment {
            CodeFragment::Line(s) => self.line(&s),
            CodeFragment::Blank => self.blank(),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                let builder = body
                    .into_iter()
                    .fold(self.line(&header).indent(), |b, f| b.apply_fragment(f))
                    .dedent();
                match close {
                    Some(c) => builder.line(&c),
                    None => builder,
                }
            }
            CodeFragment::Indent(fragments) => fragments
                .into_iter()
                .fold(self.indent(), |b, f| b.apply_fragment(f))
                .dedent(),
            CodeFragment::JsDoc(text) => self.jsdoc(&text),
        }
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
