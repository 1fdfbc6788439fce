//! Callable API operations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Shape;

/// HTTP verb of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl HttpMethod {
    /// Lowercase verb string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
        }
    }
}

/// Request body media kind, selected strictly from the declared content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Json,
    Multipart,
    UrlEncoded,
    Other(String),
}

impl ContentKind {
    /// Classify a MIME string.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        match essence {
            "application/json" => ContentKind::Json,
            "multipart/form-data" => ContentKind::Multipart,
            "application/x-www-form-urlencoded" => ContentKind::UrlEncoded,
            other => ContentKind::Other(other.to_string()),
        }
    }
}

impl Default for ContentKind {
    fn default() -> Self {
        ContentKind::Json
    }
}

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
}

/// One operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub required: bool,
    pub shape: Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: ParamLocation,
}

/// Request body shape plus whether the caller must supply one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub shape: Shape,
    pub required: bool,
}

/// One callable API action.
///
/// `service_name` is unique across the project: it is both the emitted
/// function identifier and the key under which the raw endpoint path is
/// exposed on the generated function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub service_name: String,
    pub method: HttpMethod,
    /// Raw endpoint path, placeholders intact (e.g. `/pets/{id}`).
    pub path: String,
    /// Path parameters in declared order.
    pub path_params: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Name of the synthesized named type grouping the query parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_params_type: Option<String>,
    /// When true the query-params argument is optional. Groups default to
    /// required; extraction flips this only when every member is optional.
    pub query_params_optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_params_type: Option<String>,
    pub header_params_optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Shape>,
    pub content_type: ContentKind,
    /// Opaque security expression passed through to the dispatcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    /// Operation-level call options merged under caller overrides.
    pub call_options: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_note: Option<String>,
}

impl Operation {
    pub fn new(service_name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    /// True when the endpoint path needs template substitution.
    pub fn has_path_params(&self) -> bool {
        !self.path_params.is_empty()
    }
}

impl Default for Operation {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            method: HttpMethod::Get,
            path: String::new(),
            path_params: Vec::new(),
            request_body: None,
            query_params_type: None,
            query_params_optional: false,
            header_params_type: None,
            header_params_optional: false,
            response: None,
            content_type: ContentKind::Json,
            security: None,
            call_options: IndexMap::new(),
            description: None,
            deprecated: false,
            deprecation_note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_from_mime() {
        assert_eq!(ContentKind::from_mime("application/json"), ContentKind::Json);
        assert_eq!(
            ContentKind::from_mime("application/json; charset=utf-8"),
            ContentKind::Json
        );
        assert_eq!(
            ContentKind::from_mime("multipart/form-data"),
            ContentKind::Multipart
        );
        assert_eq!(
            ContentKind::from_mime("application/x-www-form-urlencoded"),
            ContentKind::UrlEncoded
        );
        assert_eq!(
            ContentKind::from_mime("application/octet-stream"),
            ContentKind::Other("application/octet-stream".to_string())
        );
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "get");
        assert_eq!(HttpMethod::Delete.as_str(), "delete");
    }

    #[test]
    fn test_has_path_params() {
        let mut op = Operation::new("getPet", HttpMethod::Get, "/pets/{id}");
        assert!(!op.has_path_params());

        op.path_params.push(Parameter {
            name: "id".to_string(),
            required: true,
            shape: Shape::string(),
            description: None,
            location: ParamLocation::Path,
        });
        assert!(op.has_path_params());
    }
}
