//! TypeScript client emitter for the tsugu client generator.
//!
//! Turns an extracted [`Project`](tsugu_ir::Project) into the generated
//! client sources:
//!
//! - `types.ts` - named type declarations ([`types_module`])
//! - `services.ts` - one callable async function per operation
//!   ([`api_module`])
//! - `hub.ts` - optional real-time hub wrapper ([`hub_module`])
//! - `httpRequest.ts` / `config.ts` - fixed runtime support ([`files`])
//!
//! The two module emitters share one [`resolver::Resolver`] and are
//! fail-closed: a failed entry aborts the pass and yields an empty module
//! rather than partial output.

pub mod api_module;
pub mod ast;
pub mod files;
pub mod hub_module;
pub mod jsdoc;
pub mod naming;
pub mod resolver;
pub mod types_module;

mod generator;
mod options;

pub use generator::{GenerateResult, Generator};
pub use jsdoc::DocComment;
pub use naming::TS_NAMING;
pub use options::{Dialect, EnumStyle, Options};
pub use resolver::Resolver;

/// Header prepended to every regenerated module.
pub const AUTOGENERATED_HEADER: &str = "// AUTO-GENERATED by tsugu. Do not edit this file directly; it is\n// rewritten on every generation run. Adjust tsugu.config.json instead.\n";
