//! TypeScript AST builders.
//!
//! High-level builders for the declaration and expression forms the
//! emitters produce. Every builder renders through [`CodeFragment`]s; the
//! shared `CodeBuilder` is the only printer.
//!
//! [`CodeFragment`]: tsugu_codegen::CodeFragment

mod calls;
mod fns;
mod imports;
mod objects;
mod types;

pub use calls::{ChainLink, DispatchCall, PromiseChain};
pub use fns::{ArrowFnConst, Param};
pub use imports::Import;
pub use objects::JsObject;
pub use types::{EnumDecl, EnumMember, Field, Interface, TypeAlias};
