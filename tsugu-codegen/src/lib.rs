//! Shared code generation utilities for the tsugu client generator.
//!
//! Language-agnostic building blocks used by the emitter crates:
//!
//! - [`builder`] - the declaration/expression tree printer
//!   ([`CodeBuilder`], [`CodeFragment`], [`Renderable`])
//! - [`naming`] - name sanitization, the stable ascending comparator, and
//!   the whole-word matcher
//! - [`diagnostic`] - per-entry emission diagnostics and their aggregation
//! - [`references`] - incremental tracking of named-type references for
//!   import emission
//! - [`files`] - generated-file write rules

pub mod builder;
pub mod diagnostic;
pub mod files;
pub mod naming;
pub mod references;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use diagnostic::{Diagnostic, Severity, collect_entries};
pub use files::{FileRules, GeneratedFile, Overwrite, PreviewFile, WriteResult};
pub use references::ReferenceTracker;
