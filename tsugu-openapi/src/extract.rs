//! Lowering: parsed documents into the generator IR.
//!
//! ```text
//! Document (wire format) → Project (IR) → emitters
//! ```
//!
//! Extraction is where query and header parameters turn into synthesized
//! named types, `$ref` pointers become plain reference names, and
//! operations get stable service names when the document omits
//! `operationId`.

use indexmap::IndexMap;
use tsugu_codegen::naming::to_pascal_case;
use tsugu_ir::{
    ContentKind, Hub, HubMethod, HubParam, HttpMethod, NamedType, Operation, ParamLocation,
    Parameter, Project, Property, RequestBody, Shape, ShapeKind,
};

use crate::document::{
    AdditionalProperties, Document, HubDocument, OperationObject, ParameterObject, PathItem,
    ResponseObject, SchemaObject,
};

/// Lower a parsed document into the emitter IR.
pub fn extract(document: &Document) -> Project {
    let mut types: Vec<NamedType> = document
        .components
        .schemas
        .iter()
        .map(|(name, schema)| NamedType {
            name: name.clone(),
            shape: lower_schema(schema),
            description: schema.description.clone(),
        })
        .collect();

    let mut operations = Vec::new();
    for (path, item) in &document.paths {
        for (method, operation) in verbs(item) {
            operations.push(lower_operation(
                path,
                method,
                operation,
                &item.parameters,
                &mut types,
            ));
        }
    }

    log::debug!(
        "extracted {} named types and {} operations",
        types.len(),
        operations.len()
    );

    Project { types, operations }
}

/// Lower a hub description document.
pub fn extract_hub(document: &HubDocument) -> Hub {
    let lower_method = |m: &crate::document::HubMethodObject| HubMethod {
        name: m.name.clone(),
        params: m
            .params
            .iter()
            .map(|p| HubParam {
                name: p.name.clone(),
                shape: p.schema.as_ref().map(lower_schema).unwrap_or_default(),
            })
            .collect(),
        response: m.returns.as_ref().map(lower_schema),
    };

    Hub {
        path: document.path.clone(),
        methods: document.methods.iter().map(lower_method).collect(),
        callbacks: document.callbacks.iter().map(lower_method).collect(),
    }
}

fn verbs(item: &PathItem) -> Vec<(HttpMethod, &OperationObject)> {
    let mut out = Vec::new();
    if let Some(op) = &item.get {
        out.push((HttpMethod::Get, op));
    }
    if let Some(op) = &item.put {
        out.push((HttpMethod::Put, op));
    }
    if let Some(op) = &item.post {
        out.push((HttpMethod::Post, op));
    }
    if let Some(op) = &item.delete {
        out.push((HttpMethod::Delete, op));
    }
    if let Some(op) = &item.patch {
        out.push((HttpMethod::Patch, op));
    }
    if let Some(op) = &item.head {
        out.push((HttpMethod::Head, op));
    }
    out
}

fn lower_operation(
    path: &str,
    method: HttpMethod,
    operation: &OperationObject,
    shared_params: &[ParameterObject],
    types: &mut Vec<NamedType>,
) -> Operation {
    let service_name = operation
        .operation_id
        .clone()
        .unwrap_or_else(|| derive_service_name(method, path));

    let merged: Vec<&ParameterObject> = shared_params
        .iter()
        .chain(operation.parameters.iter())
        .collect();

    let path_params: Vec<Parameter> = merged
        .iter()
        .filter(|p| p.location == "path")
        .map(|p| lower_parameter(p, ParamLocation::Path))
        .collect();
    let query: Vec<&ParameterObject> = merged
        .iter()
        .filter(|p| p.location == "query")
        .copied()
        .collect();
    let header: Vec<&ParameterObject> = merged
        .iter()
        .filter(|p| p.location == "header")
        .copied()
        .collect();

    let (query_params_type, query_params_optional) =
        synthesize_group(types, &service_name, "Query", &query);
    let (header_params_type, header_params_optional) =
        synthesize_group(types, &service_name, "Header", &header);

    let (request_body, content_type) = match &operation.request_body {
        Some(body) => match body.content.first() {
            Some((mime, media)) => (
                Some(RequestBody {
                    shape: media.schema.as_ref().map(lower_schema).unwrap_or_default(),
                    required: body.required,
                }),
                ContentKind::from_mime(mime),
            ),
            None => (None, ContentKind::Json),
        },
        None => (None, ContentKind::Json),
    };

    let response = operation
        .responses
        .iter()
        .find(|(status, response)| status.starts_with('2') && has_schema(response))
        .and_then(|(_, response)| response.content.first())
        .and_then(|(_, media)| media.schema.as_ref())
        .map(lower_schema);

    Operation {
        service_name,
        method,
        path: path.to_string(),
        path_params,
        request_body,
        query_params_type,
        query_params_optional,
        header_params_type,
        header_params_optional,
        response,
        content_type,
        security: operation
            .security
            .as_ref()
            .and_then(|v| serde_json::to_string(v).ok()),
        call_options: IndexMap::new(),
        description: operation
            .description
            .clone()
            .or_else(|| operation.summary.clone()),
        deprecated: operation.deprecated,
        deprecation_note: operation.deprecated_message.clone(),
    }
}

/// Derive a stable service name for operations without an `operationId`:
/// the verb plus the PascalCase path segments, placeholders stripped.
fn derive_service_name(method: HttpMethod, path: &str) -> String {
    let segments: String = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| to_pascal_case(s.trim_start_matches('{').trim_end_matches('}')))
        .collect();
    format!("{}{}", method.as_str(), segments)
}

/// Collapse a parameter group into a synthesized named object type.
///
/// The group parameter defaults to required; it becomes optional only when
/// every member is optional.
fn synthesize_group(
    types: &mut Vec<NamedType>,
    service_name: &str,
    label: &str,
    params: &[&ParameterObject],
) -> (Option<String>, bool) {
    if params.is_empty() {
        return (None, false);
    }

    let name = format!("{}{}Params", to_pascal_case(service_name), label);
    let mut properties = IndexMap::new();
    for param in params {
        let mut shape = param.schema.as_ref().map(lower_schema).unwrap_or_default();
        if shape.description.is_none() {
            shape.description = param.description.clone();
        }
        properties.insert(
            param.name.clone(),
            Property {
                shape,
                required: param.required,
            },
        );
    }

    let all_optional = params.iter().all(|p| !p.required);
    types.push(NamedType {
        name: name.clone(),
        shape: Shape::object(properties),
        description: Some(format!("{} parameters for `{}`.", label, service_name)),
    });

    (Some(name), all_optional)
}

fn lower_parameter(param: &ParameterObject, location: ParamLocation) -> Parameter {
    Parameter {
        name: param.name.clone(),
        required: param.required,
        shape: param.schema.as_ref().map(lower_schema).unwrap_or_default(),
        description: param.description.clone(),
        location,
    }
}

fn has_schema(response: &ResponseObject) -> bool {
    response
        .content
        .first()
        .is_some_and(|(_, media)| media.schema.is_some())
}

/// Lower one schema object into an IR shape.
pub fn lower_schema(schema: &SchemaObject) -> Shape {
    Shape {
        kind: lower_kind(schema),
        enum_values: schema.enum_values.clone(),
        enum_names: schema.enum_names.clone(),
        all_of: schema
            .all_of
            .as_ref()
            .map(|members| members.iter().map(lower_schema).collect()),
        one_of: schema
            .one_of
            .as_ref()
            .map(|members| members.iter().map(lower_schema).collect()),
        items: schema
            .items
            .as_ref()
            .map(|items| Box::new(lower_schema(items))),
        reference: schema.reference.as_ref().map(|r| reference_name(r)),
        properties: schema.properties.as_ref().map(|props| {
            let required = schema.required.as_deref().unwrap_or_default();
            props
                .iter()
                .map(|(name, prop)| {
                    (
                        name.clone(),
                        Property {
                            shape: lower_schema(prop),
                            required: required.contains(name),
                        },
                    )
                })
                .collect()
        }),
        additional: match schema.additional_properties.as_deref() {
            Some(AdditionalProperties::Schema(value)) => Some(Box::new(lower_schema(value))),
            Some(AdditionalProperties::Flag(true)) => Some(Box::new(Shape::default())),
            Some(AdditionalProperties::Flag(false)) | None => None,
        },
        description: schema.description.clone(),
        deprecated: schema.deprecated.unwrap_or(false),
        deprecation_note: schema.deprecated_message.clone(),
        example: schema.example.clone(),
    }
}

fn lower_kind(schema: &SchemaObject) -> Option<ShapeKind> {
    match schema.schema_type.as_deref() {
        Some("string") => match schema.format.as_deref() {
            Some("binary") | Some("file") => Some(ShapeKind::File),
            _ => Some(ShapeKind::String),
        },
        Some("integer") => Some(ShapeKind::Integer),
        Some("number") => Some(ShapeKind::Number),
        Some("boolean") => Some(ShapeKind::Boolean),
        Some("object") => Some(ShapeKind::Object),
        Some("array") => Some(ShapeKind::Array),
        Some("file") => Some(ShapeKind::File),
        _ => None,
    }
}

/// `#/components/schemas/Pet` → `Pet`.
fn reference_name(reference: &str) -> String {
    reference
        .rsplit('/')
        .next()
        .unwrap_or(reference)
        .to_string()
}
