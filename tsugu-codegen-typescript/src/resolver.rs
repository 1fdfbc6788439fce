//! The schema resolver: shapes to TypeScript type expressions.
//!
//! Resolution is total, pure, and deterministic. Facets are consumed in a
//! fixed precedence order and anything unrecognized falls through to `any`;
//! a malformed shape can never fail an emission pass, only degrade to the
//! universal type.

use serde_json::Value;
use tsugu_codegen::ReferenceTracker;
use tsugu_ir::{Property, Shape, ShapeKind};

use crate::{
    Options,
    naming::{TS_NAMING, object_key},
};

/// Render an enum literal value: numeric values unquoted, everything else
/// quoted.
pub(crate) fn literal(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => quoted(s),
        other => quoted(&other.to_string()),
    }
}

/// A double-quoted JavaScript string literal.
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Resolves shapes against a fixed set of [`Options`], recording every
/// named-type reference it encounters.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    options: &'a Options,
}

impl<'a> Resolver<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Map one shape to a type expression.
    ///
    /// Precedence: enum, composite, array, reference, object, primitive,
    /// `any`.
    pub fn resolve(&self, shape: &Shape, refs: &mut ReferenceTracker) -> String {
        if let Some(values) = shape.enum_values.as_ref().filter(|v| !v.is_empty()) {
            return values
                .iter()
                .map(literal)
                .collect::<Vec<_>>()
                .join(" | ");
        }

        if let Some(members) = shape.all_of.as_ref().filter(|m| !m.is_empty()) {
            return self.join_members(members, " & ", refs);
        }
        if let Some(members) = shape.one_of.as_ref().filter(|m| !m.is_empty()) {
            return self.join_members(members, " | ", refs);
        }

        if shape.kind == Some(ShapeKind::Array) || shape.items.is_some() {
            let element = match &shape.items {
                Some(items) => self.resolve(items, refs),
                None => "any".to_string(),
            };
            return format!("{}[]", parenthesized(&element));
        }

        if let Some(name) = &shape.reference {
            let ident = TS_NAMING.type_ident(name);
            refs.record(&ident);
            return ident;
        }

        if shape.is_object_like() {
            return self.object_expr(shape, refs);
        }

        match shape.kind {
            Some(ShapeKind::String) => "string".to_string(),
            Some(ShapeKind::Integer) | Some(ShapeKind::Number) => "number".to_string(),
            Some(ShapeKind::Boolean) => "boolean".to_string(),
            Some(ShapeKind::File) => "File".to_string(),
            _ => "any".to_string(),
        }
    }

    /// Resolve a property into its rendered type and optionality marker.
    ///
    /// In legacy mode a non-required property keeps a required key and the
    /// type widens with `| undefined`; otherwise the key gets a `?`.
    pub fn property_parts(
        &self,
        property: &Property,
        refs: &mut ReferenceTracker,
    ) -> (String, bool) {
        let ty = self.resolve(&property.shape, refs);
        if property.required {
            (ty, false)
        } else if self.options.legacy_optional {
            (format!("{} | undefined", ty), false)
        } else {
            (ty, true)
        }
    }

    fn join_members(
        &self,
        members: &[Shape],
        combinator: &str,
        refs: &mut ReferenceTracker,
    ) -> String {
        members
            .iter()
            .map(|m| self.resolve(m, refs))
            .collect::<Vec<_>>()
            .join(combinator)
    }

    fn object_expr(&self, shape: &Shape, refs: &mut ReferenceTracker) -> String {
        let mut parts = Vec::new();

        if let Some(properties) = &shape.properties {
            for (key, property) in properties {
                let (ty, optional) = self.property_parts(property, refs);
                let marker = if optional { "?" } else { "" };
                parts.push(format!("{}{}: {}", object_key(key), marker, ty));
            }
        }
        if let Some(additional) = &shape.additional {
            parts.push(format!("[key: string]: {}", self.resolve(additional, refs)));
        }

        if parts.is_empty() {
            "{ [key: string]: any }".to_string()
        } else {
            format!("{{ {} }}", parts.join("; "))
        }
    }
}

/// Wrap a union or intersection expression before the `[]` suffix binds
/// tighter than it should.
fn parenthesized(expression: &str) -> String {
    if expression.contains(" | ") || expression.contains(" & ") {
        format!("({})", expression)
    } else {
        expression.to_string()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use serde_json::json;

    use super::*;

    fn resolve(shape: &Shape) -> String {
        let options = Options::default();
        Resolver::new(&options).resolve(shape, &mut ReferenceTracker::new())
    }

    #[test]
    fn test_primitives() {
        assert_eq!(resolve(&Shape::string()), "string");
        assert_eq!(resolve(&Shape::integer()), "number");
        assert_eq!(resolve(&Shape::number()), "number");
        assert_eq!(resolve(&Shape::boolean()), "boolean");
        assert_eq!(resolve(&Shape::of_kind(ShapeKind::File)), "File");
    }

    #[test]
    fn test_unknown_falls_back_to_any() {
        assert_eq!(resolve(&Shape::default()), "any");
    }

    #[test]
    fn test_enum_expression() {
        let shape = Shape::enumeration(vec![json!("a"), json!("b")]);
        assert_eq!(resolve(&shape), "\"a\" | \"b\"");

        let numeric = Shape::enumeration(vec![json!(1), json!(2)]);
        assert_eq!(resolve(&numeric), "1 | 2");
    }

    #[test]
    fn test_composites() {
        let all = Shape {
            all_of: Some(vec![Shape::reference("A"), Shape::reference("B")]),
            ..Shape::default()
        };
        assert_eq!(resolve(&all), "A & B");

        let one = Shape {
            one_of: Some(vec![Shape::reference("A"), Shape::reference("B")]),
            ..Shape::default()
        };
        assert_eq!(resolve(&one), "A | B");
    }

    #[test]
    fn test_enum_precedes_composite() {
        let shape = Shape {
            one_of: Some(vec![Shape::reference("A")]),
            ..Shape::enumeration(vec![json!("x")])
        };
        assert_eq!(resolve(&shape), "\"x\"");
    }

    #[test]
    fn test_array() {
        assert_eq!(resolve(&Shape::array(Shape::string())), "string[]");
        assert_eq!(
            resolve(&Shape::of_kind(ShapeKind::Array)),
            "any[]",
            "array without items degrades to any[]"
        );
    }

    #[test]
    fn test_array_of_union_is_parenthesized() {
        let shape = Shape::array(Shape {
            one_of: Some(vec![Shape::reference("A"), Shape::reference("B")]),
            ..Shape::default()
        });
        assert_eq!(resolve(&shape), "(A | B)[]");
    }

    #[test]
    fn test_reference_records_and_sanitizes() {
        let options = Options::default();
        let resolver = Resolver::new(&options);
        let mut refs = ReferenceTracker::new();

        let out = resolver.resolve(&Shape::reference("Page«Pet»"), &mut refs);
        assert_eq!(out, "Page_Pet_");
        assert!(refs.contains("Page_Pet_"));
    }

    #[test]
    fn test_object_expression() {
        let mut props = IndexMap::new();
        props.insert("id".to_string(), Property::required(Shape::integer()));
        props.insert("name".to_string(), Property::optional(Shape::string()));
        let shape = Shape::object(props);

        assert_eq!(resolve(&shape), "{ id: number; name?: string }");
    }

    #[test]
    fn test_object_catch_all() {
        let shape = Shape {
            additional: Some(Box::new(Shape::string())),
            ..Shape::of_kind(ShapeKind::Object)
        };
        assert_eq!(resolve(&shape), "{ [key: string]: string }");

        let bare = Shape::of_kind(ShapeKind::Object);
        assert_eq!(resolve(&bare), "{ [key: string]: any }");
    }

    #[test]
    fn test_legacy_optional_properties() {
        let options = Options {
            legacy_optional: true,
            ..Options::default()
        };
        let resolver = Resolver::new(&options);
        let mut refs = ReferenceTracker::new();

        let mut props = IndexMap::new();
        props.insert("name".to_string(), Property::optional(Shape::string()));
        let out = resolver.resolve(&Shape::object(props), &mut refs);

        assert_eq!(out, "{ name: string | undefined }");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let shape = Shape::array(Shape::reference("Pet"));
        assert_eq!(resolve(&shape), resolve(&shape));
    }

    #[test]
    fn test_mutual_references_resolve_by_name() {
        // A and B referencing each other never inline, so resolution
        // terminates and emits plain names.
        assert_eq!(resolve(&Shape::reference("A")), "A");
        assert_eq!(resolve(&Shape::reference("B")), "B");
    }

    #[test]
    fn test_literal_rendering() {
        assert_eq!(literal(&json!(3)), "3");
        assert_eq!(literal(&json!("a")), "\"a\"");
        assert_eq!(literal(&json!("say \"hi\"")), "\"say \\\"hi\\\"\"");
    }
}
