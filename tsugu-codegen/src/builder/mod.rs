//! The declaration-tree printer.
//!
//! Emitters build [`CodeFragment`] trees through the AST builders and hand
//! them to [`CodeBuilder`], the single place fragments become indented text.
//! Nothing outside this module concatenates generated code by hand.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
