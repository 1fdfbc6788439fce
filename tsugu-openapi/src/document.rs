//! Serde model of the OpenAPI 3 subset the generator consumes.
//!
//! Only the fields the extraction pass reads are modeled; everything else
//! in a document is ignored on deserialization. Validation against the
//! OpenAPI meta-schema is out of scope.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// A parsed API document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Declared OpenAPI version. Swagger 2.x documents have none.
    pub openapi: Option<String>,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: IndexMap<String, PathItem>,
    pub components: Components,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn from_str(text: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::parse(e, text, filename))
    }

    /// Parse a document from a file on disk.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str(&text, &path.display().to_string())
    }

    /// The first declared server URL, used to seed the runtime config.
    pub fn base_url(&self) -> &str {
        self.servers.first().map(|s| s.url.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Server {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    pub schemas: IndexMap<String, SchemaObject>,
    pub security_schemes: IndexMap<String, Value>,
}

/// One path entry with its per-verb operations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathItem {
    pub get: Option<OperationObject>,
    pub put: Option<OperationObject>,
    pub post: Option<OperationObject>,
    pub delete: Option<OperationObject>,
    pub patch: Option<OperationObject>,
    pub head: Option<OperationObject>,
    /// Parameters shared by every operation under this path.
    pub parameters: Vec<ParameterObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationObject {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub deprecated: bool,
    #[serde(rename = "x-deprecatedMessage")]
    pub deprecated_message: Option<String>,
    pub parameters: Vec<ParameterObject>,
    pub request_body: Option<RequestBodyObject>,
    pub responses: IndexMap<String, ResponseObject>,
    pub security: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParameterObject {
    pub name: String,
    /// Parameter location: "path", "query", or "header".
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub description: Option<String>,
    pub schema: Option<SchemaObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestBodyObject {
    pub required: bool,
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaType {
    pub schema: Option<SchemaObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponseObject {
    pub description: Option<String>,
    pub content: IndexMap<String, MediaType>,
}

/// A schema object, kept facet-for-facet close to the wire format.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaObject {
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(rename = "x-enumNames")]
    pub enum_names: Option<Vec<String>>,
    pub all_of: Option<Vec<SchemaObject>>,
    pub one_of: Option<Vec<SchemaObject>>,
    pub items: Option<Box<SchemaObject>>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub properties: Option<IndexMap<String, SchemaObject>>,
    pub required: Option<Vec<String>>,
    pub additional_properties: Option<Box<AdditionalProperties>>,
    pub description: Option<String>,
    pub deprecated: Option<bool>,
    #[serde(rename = "x-deprecatedMessage")]
    pub deprecated_message: Option<String>,
    pub example: Option<Value>,
}

/// `additionalProperties` is either a boolean toggle or a value schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Flag(bool),
    Schema(SchemaObject),
}

/// A real-time hub description document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HubDocument {
    pub path: String,
    pub methods: Vec<HubMethodObject>,
    pub callbacks: Vec<HubMethodObject>,
}

impl HubDocument {
    /// Parse a hub document from JSON text.
    pub fn from_str(text: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::parse(e, text, filename))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HubMethodObject {
    pub name: String,
    pub params: Vec<HubParamObject>,
    pub returns: Option<SchemaObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HubParamObject {
    pub name: String,
    pub schema: Option<SchemaObject>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parses_minimal_document() {
        let text = json!({
            "openapi": "3.0.0",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "servers": [{ "url": "https://petstore.example.com/v2" }],
            "paths": {},
        })
        .to_string();

        let document = Document::from_str(&text, "openapi.json").unwrap();
        assert_eq!(document.openapi.as_deref(), Some("3.0.0"));
        assert_eq!(document.base_url(), "https://petstore.example.com/v2");
    }

    #[test]
    fn test_parse_failure_is_diagnosed() {
        let err = Document::from_str("{ not json", "openapi.json").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_schema_object_facets() {
        let text = json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": { "type": "integer" },
                "tag": { "$ref": "#/components/schemas/Tag" },
            },
            "additionalProperties": { "type": "string" },
        })
        .to_string();

        let schema: SchemaObject = serde_json::from_str(&text).unwrap();
        assert_eq!(schema.schema_type.as_deref(), Some("object"));
        assert_eq!(schema.required.as_deref(), Some(&["id".to_string()][..]));
        let props = schema.properties.as_ref().unwrap();
        assert_eq!(
            props["tag"].reference.as_deref(),
            Some("#/components/schemas/Tag")
        );
        assert!(matches!(
            schema.additional_properties.as_deref(),
            Some(AdditionalProperties::Schema(_))
        ));
    }

    #[test]
    fn test_additional_properties_boolean_form() {
        let schema: SchemaObject =
            serde_json::from_str(r#"{ "additionalProperties": true }"#).unwrap();
        assert!(matches!(
            schema.additional_properties.as_deref(),
            Some(AdditionalProperties::Flag(true))
        ));
    }

    #[test]
    fn test_enum_extension_names() {
        let schema: SchemaObject = serde_json::from_str(
            r#"{ "enum": [0, 1], "x-enumNames": ["Ok", "Failed"] }"#,
        )
        .unwrap();
        assert_eq!(schema.enum_values.as_ref().unwrap().len(), 2);
        assert_eq!(
            schema.enum_names.as_deref(),
            Some(&["Ok".to_string(), "Failed".to_string()][..])
        );
    }

    #[test]
    fn test_swagger2_document_has_no_openapi_field() {
        let document =
            Document::from_str(r#"{ "swagger": "2.0", "paths": {} }"#, "swagger.json").unwrap();
        assert!(document.openapi.is_none());
    }
}
