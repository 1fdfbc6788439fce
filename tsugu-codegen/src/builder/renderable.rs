//! Code fragments: the intermediate form between AST builders and text.

/// One piece of a declaration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line at the current indentation.
    Line(String),
    /// An empty line.
    Blank,
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments rendered one level deeper, with no surrounding lines.
    Indent(Vec<CodeFragment>),
    /// A JSDoc comment block. Single-line text renders as `/** text */`,
    /// multi-line as a starred block.
    JsDoc(String),
}

/// Trait for AST nodes that can be printed.
pub trait Renderable {
    /// Convert the node to code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
