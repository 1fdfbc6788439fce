//! Emitter configuration.

/// How enum shapes are declared in the types module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumStyle {
    /// `export enum Name { ... }` declarations.
    #[default]
    Declaration,
    /// Literal-union type aliases (`export type Name = "a" | "b";`).
    Union,
}

/// Output dialect. JavaScript output is produced by transpiling the
/// generated TypeScript after emission; the emitters are dialect-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    TypeScript,
    JavaScript,
}

/// Generation options, threaded explicitly through the resolver and both
/// emitters. There is no ambient generator state.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub enum_style: EnumStyle,
    pub dialect: Dialect,
    /// Legacy property-nullability mode: a non-required property renders as
    /// `"name": T | undefined` instead of `"name"?: T`.
    pub legacy_optional: bool,
}
