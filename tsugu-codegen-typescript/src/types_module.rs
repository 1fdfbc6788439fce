//! The type-declarations module emitter.
//!
//! Drives the resolver over every named shape and assembles `types.ts`.
//! Output is diffed across regenerations, so entries are sorted with the
//! shared ascending comparator before emission.

use std::collections::BTreeSet;

use tsugu_codegen::{
    CodeBuilder, CodeFragment, Diagnostic, ReferenceTracker, Renderable, collect_entries,
    naming::{ascending, sanitize_name},
};
use tsugu_ir::{NamedType, Shape, ShapeKind};

use crate::{
    AUTOGENERATED_HEADER, EnumStyle, Options,
    ast::{EnumDecl, Field, Interface, TypeAlias},
    jsdoc::DocComment,
    naming::TS_NAMING,
    resolver::{Resolver, literal, quoted},
};

/// Render the complete types module.
///
/// Fail-closed: if any entry fails, every diagnostic is logged and the
/// whole module collapses to an empty string, never partial output.
pub fn render_types(types: &[NamedType], options: &Options) -> String {
    let mut sorted: Vec<&NamedType> = types.iter().collect();
    sorted.sort_by(|a, b| ascending(&a.name, &b.name));

    let resolver = Resolver::new(options);
    let mut refs = ReferenceTracker::new();
    let mut seen = BTreeSet::new();

    let results: Vec<Result<String, Diagnostic>> = sorted
        .iter()
        .map(|named| emit_entry(named, resolver, options, &mut refs, &mut seen))
        .collect();

    match collect_entries(results) {
        Ok(entries) => {
            let mut builder = CodeBuilder::typescript().raw(AUTOGENERATED_HEADER);
            for entry in &entries {
                builder = builder.blank().raw(entry);
            }
            builder.build()
        }
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                log::error!("types emission aborted: {}", diagnostic);
            }
            String::new()
        }
    }
}

fn emit_entry(
    named: &NamedType,
    resolver: Resolver<'_>,
    options: &Options,
    refs: &mut ReferenceTracker,
    seen: &mut BTreeSet<String>,
) -> Result<String, Diagnostic> {
    let ident = TS_NAMING.type_ident(&named.name);
    if !seen.insert(ident.clone()) {
        return Err(
            Diagnostic::error("types", format!("duplicate declaration name `{}`", ident))
                .at(&named.name),
        );
    }

    let doc = DocComment::new()
        .description(named.doc_description())
        .deprecated(
            named.shape.deprecated,
            named.shape.deprecation_note.as_deref(),
        )
        .example(named.shape.example.as_ref());

    let declaration = declaration_fragments(&ident, &named.shape, resolver, options, refs)
        .map_err(|d| d.at(&named.name))?;

    let mut builder = CodeBuilder::typescript();
    if let Some(fragment) = doc.fragment() {
        builder = builder.apply_fragment(fragment);
    }
    Ok(declaration
        .into_iter()
        .fold(builder, |b, f| b.apply_fragment(f))
        .build())
}

/// Wrap a shape into its top-level declaration form.
///
/// Precedence mirrors expression resolution: enum, composite, array,
/// reference, object, fallback alias to `any`. An object shape that also
/// carries a `oneOf` facet is always an alias, never an interface.
fn declaration_fragments(
    ident: &str,
    shape: &Shape,
    resolver: Resolver<'_>,
    options: &Options,
    refs: &mut ReferenceTracker,
) -> Result<Vec<CodeFragment>, Diagnostic> {
    if let Some(values) = shape.enum_values.as_ref().filter(|v| !v.is_empty()) {
        if options.enum_style == EnumStyle::Union {
            let union = values
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => quoted(s),
                    other => quoted(&other.to_string()),
                })
                .collect::<Vec<_>>()
                .join(" | ");
            return Ok(TypeAlias::new(ident, union).to_fragments());
        }

        if let Some(names) = &shape.enum_names {
            if names.len() != values.len() {
                return Err(Diagnostic::error(
                    "types",
                    format!(
                        "enum display-name list has {} entries for {} values",
                        names.len(),
                        values.len()
                    ),
                ));
            }
        }

        let mut decl = EnumDecl::new(ident);
        for (index, value) in values.iter().enumerate() {
            let member = match (&shape.enum_names, value) {
                (Some(names), _) => sanitize_name(&names[index]),
                (None, serde_json::Value::String(s)) => sanitize_name(s),
                (None, _) => format!("Value{}", index),
            };
            decl = decl.member(member, literal(value));
        }
        return Ok(decl.to_fragments());
    }

    if shape.is_composite() {
        return Ok(TypeAlias::new(ident, resolver.resolve(shape, refs)).to_fragments());
    }

    if shape.kind == Some(ShapeKind::Array) || shape.items.is_some() {
        return Ok(TypeAlias::new(ident, resolver.resolve(shape, refs)).to_fragments());
    }

    if shape.reference.is_some() {
        return Ok(TypeAlias::new(ident, resolver.resolve(shape, refs)).to_fragments());
    }

    if shape.is_object_like() {
        let has_members = shape
            .properties
            .as_ref()
            .is_some_and(|p| !p.is_empty())
            || shape.additional.is_some();

        // An object that is also a oneOf stays an alias, by contract.
        if has_members && shape.one_of.is_none() {
            let mut interface = Interface::new(ident);
            if let Some(properties) = &shape.properties {
                for (key, property) in properties {
                    let (ty, optional) = resolver.property_parts(property, refs);
                    let mut field = Field::new(key, ty);
                    if optional {
                        field = field.optional();
                    }
                    let field_doc = DocComment::new()
                        .description(property.shape.description.as_deref())
                        .deprecated(
                            property.shape.deprecated,
                            property.shape.deprecation_note.as_deref(),
                        )
                        .example(property.shape.example.as_ref());
                    if let Some(text) = field_doc.text() {
                        field = field.doc(text);
                    }
                    interface = interface.field(field);
                }
            }
            if let Some(additional) = &shape.additional {
                interface = interface.catch_all(resolver.resolve(additional, refs));
            }
            return Ok(interface.to_fragments());
        }

        return Ok(TypeAlias::new(ident, resolver.resolve(shape, refs)).to_fragments());
    }

    Ok(TypeAlias::new(ident, resolver.resolve(shape, refs)).to_fragments())
}
