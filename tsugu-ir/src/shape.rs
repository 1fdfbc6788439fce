//! Data-shape descriptions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive or structural kind of a shape, when the document declares one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    File,
}

/// A structural description of a data value.
///
/// A shape is a bag of optional facets rather than a strict tagged union:
/// source documents routinely overlap facets (an object schema that also
/// carries `oneOf`, an enum that also declares a kind), and the resolver
/// consumes the facets in a fixed precedence order. Keeping every facet
/// representable is what makes resolution total: a contradictory
/// combination falls through to the `any` fallback instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shape {
    /// Declared kind, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShapeKind>,
    /// Ordered enum literal values (string or numeric).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Display names parallel to `enum_values`, index-aligned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_names: Option<Vec<String>>,
    /// Intersection members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Shape>>,
    /// Union members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Shape>>,
    /// Element shape for arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Shape>>,
    /// Name of another [`NamedType`]. Never inlined; this is the only way a
    /// cyclic shape graph is representable, which is what makes cycles safe
    /// to emit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Ordered property map for objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Property>>,
    /// Catch-all value shape for keys not listed in `properties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<Box<Shape>>,
    /// Human description carried into the generated doc comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Deprecation flag carried into the generated doc comment.
    pub deprecated: bool,
    /// Message attached to the deprecation, when the document provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_note: Option<String>,
    /// Example value carried into the generated doc comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl Shape {
    /// A shape with just a declared kind.
    pub fn of_kind(kind: ShapeKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::of_kind(ShapeKind::String)
    }

    pub fn integer() -> Self {
        Self::of_kind(ShapeKind::Integer)
    }

    pub fn number() -> Self {
        Self::of_kind(ShapeKind::Number)
    }

    pub fn boolean() -> Self {
        Self::of_kind(ShapeKind::Boolean)
    }

    /// A reference to another named type.
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            reference: Some(name.into()),
            ..Self::default()
        }
    }

    /// An array of the given element shape.
    pub fn array(items: Shape) -> Self {
        Self {
            kind: Some(ShapeKind::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// An object with the given ordered properties.
    pub fn object(properties: IndexMap<String, Property>) -> Self {
        Self {
            kind: Some(ShapeKind::Object),
            properties: Some(properties),
            ..Self::default()
        }
    }

    /// An enum over the given literal values.
    pub fn enumeration(values: Vec<Value>) -> Self {
        Self {
            enum_values: Some(values),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the shape carries enum literal values.
    pub fn is_enum(&self) -> bool {
        self.enum_values.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// True when the shape carries an `allOf` or `oneOf` facet.
    pub fn is_composite(&self) -> bool {
        self.all_of.is_some() || self.one_of.is_some()
    }

    /// True when the shape describes an object, by kind or by facets.
    pub fn is_object_like(&self) -> bool {
        self.kind == Some(ShapeKind::Object)
            || self.properties.is_some()
            || self.additional.is_some()
    }
}

/// One object property: its shape plus whether the key must be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub shape: Shape,
    pub required: bool,
}

impl Property {
    pub fn required(shape: Shape) -> Self {
        Self {
            shape,
            required: true,
        }
    }

    pub fn optional(shape: Shape) -> Self {
        Self {
            shape,
            required: false,
        }
    }
}

/// A shape bound to a unique declaration name.
///
/// Names are unique after sanitization across the whole set; the emitters
/// rely on that to prune imports by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    pub shape: Shape,
    /// Description attached at the declaration site; falls back to the
    /// shape's own description when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NamedType {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            description: None,
        }
    }

    /// The description to document the declaration with.
    pub fn doc_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.shape.description.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_facet_predicates() {
        assert!(Shape::enumeration(vec![json!("a")]).is_enum());
        assert!(!Shape::enumeration(vec![]).is_enum());
        assert!(!Shape::string().is_enum());

        let composite = Shape {
            one_of: Some(vec![Shape::string()]),
            ..Shape::default()
        };
        assert!(composite.is_composite());
        assert!(!Shape::string().is_composite());

        assert!(Shape::object(IndexMap::new()).is_object_like());
        assert!(!Shape::array(Shape::string()).is_object_like());
    }

    #[test]
    fn test_object_with_one_of_keeps_both_facets() {
        let mut props = IndexMap::new();
        props.insert("id".to_string(), Property::required(Shape::integer()));
        let shape = Shape {
            one_of: Some(vec![Shape::reference("Cat"), Shape::reference("Dog")]),
            ..Shape::object(props)
        };

        assert!(shape.is_object_like());
        assert!(shape.is_composite());
    }

    #[test]
    fn test_doc_description_fallback() {
        let named = NamedType::new("Pet", Shape::string().with_description("from shape"));
        assert_eq!(named.doc_description(), Some("from shape"));

        let named = NamedType {
            description: Some("from declaration".to_string()),
            ..named
        };
        assert_eq!(named.doc_description(), Some("from declaration"));
    }

    #[test]
    fn test_shape_round_trips_through_serde() {
        let mut props = IndexMap::new();
        props.insert("name".to_string(), Property::required(Shape::string()));
        let shape = Shape::object(props).with_description("a pet");

        let text = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&text).unwrap();
        assert_eq!(shape, back);
    }
}
