//! The callable-services module emitter.
//!
//! Builds one exported async function per operation and assembles
//! `services.ts`. Named-type references are tracked while expressions are
//! resolved, so the import list is derived incrementally instead of by
//! scanning the finished text.

use std::collections::BTreeSet;

use tsugu_codegen::{
    CodeBuilder, CodeFragment, Diagnostic, ReferenceTracker, Renderable, collect_entries,
    naming::ascending,
};
use tsugu_ir::{ContentKind, HttpMethod, NamedType, Operation};

use crate::{
    AUTOGENERATED_HEADER, Options,
    ast::{ArrowFnConst, ChainLink, DispatchCall, Import, JsObject, Param, PromiseChain},
    jsdoc::{DEPRECATION_MESSAGE, DocComment},
    naming::TS_NAMING,
    resolver::{Resolver, quoted},
};

/// Render the complete services module.
///
/// Fail-closed like the types module: any failed operation aborts the pass
/// and the module collapses to an empty string.
pub fn render_services(
    operations: &[Operation],
    types: &[NamedType],
    options: &Options,
) -> String {
    let mut sorted: Vec<&Operation> = operations.iter().collect();
    sorted.sort_by(|a, b| ascending(&a.service_name, &b.service_name));

    let resolver = Resolver::new(options);
    let mut refs = ReferenceTracker::new();
    let mut runtime: BTreeSet<&'static str> = BTreeSet::new();
    let mut seen = BTreeSet::new();

    let mut results: Vec<Result<String, Diagnostic>> = Vec::with_capacity(sorted.len());
    for operation in &sorted {
        results.push(emit_operation(
            operation,
            resolver,
            &mut refs,
            &mut runtime,
            &mut seen,
        ));
    }

    match collect_entries(results) {
        Ok(entries) => assemble(&entries, types, &refs, &runtime),
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                log::error!("services emission aborted: {}", diagnostic);
            }
            String::new()
        }
    }
}

fn assemble(
    entries: &[String],
    types: &[NamedType],
    refs: &ReferenceTracker,
    runtime: &BTreeSet<&'static str>,
) -> String {
    // Only names that are actual declarations in the types module are
    // importable; everything else the tracker saw is left alone.
    let known: BTreeSet<String> = types
        .iter()
        .map(|t| TS_NAMING.type_ident(&t.name))
        .collect();
    let type_imports: Vec<&str> = refs.names().filter(|n| known.contains(*n)).collect();

    let mut builder = CodeBuilder::typescript().raw(AUTOGENERATED_HEADER);
    if !runtime.is_empty() || !type_imports.is_empty() {
        builder = builder.blank();
    }
    if !runtime.is_empty() {
        builder = builder.emit(&Import::new("./httpRequest").named_all(runtime.iter().copied()));
    }
    if !type_imports.is_empty() {
        builder = builder.emit(&Import::new("./types").named_all(type_imports).type_only());
    }
    for entry in entries {
        builder = builder.blank().raw(entry);
    }
    builder.build()
}

fn emit_operation(
    operation: &Operation,
    resolver: Resolver<'_>,
    refs: &mut ReferenceTracker,
    runtime: &mut BTreeSet<&'static str>,
    seen: &mut BTreeSet<String>,
) -> Result<String, Diagnostic> {
    let ident = TS_NAMING.field_ident(&operation.service_name);
    if !seen.insert(ident.clone()) {
        return Err(
            Diagnostic::error("services", format!("duplicate service name `{}`", ident))
                .at(&operation.service_name),
        );
    }

    for param in &operation.path_params {
        let placeholder = format!("{{{}}}", param.name);
        if !operation.path.contains(&placeholder) {
            return Err(Diagnostic::error(
                "services",
                format!(
                    "path parameter `{}` has no `{}` placeholder in `{}`",
                    param.name, placeholder, operation.path
                ),
            )
            .at(&operation.service_name));
        }
    }

    runtime.insert("Http");
    runtime.insert("RequestOverrides");
    runtime.insert("ResponseWrapper");
    runtime.insert("overrideConfig");

    let response_ty = match &operation.response {
        Some(shape) => resolver.resolve(shape, refs),
        None => "any".to_string(),
    };

    let mut func = ArrowFnConst::new(&ident, format!("Promise<ResponseWrapper<{}>>", response_ty));

    // Fixed parameter order: path params, request body, query group,
    // header group, call overrides, then GET result callbacks.
    for param in &operation.path_params {
        let mut p = Param::new(
            TS_NAMING.field_ident(&param.name),
            resolver.resolve(&param.shape, refs),
        );
        if !param.required {
            p = p.optional();
        }
        func = func.param(p);
    }
    if let Some(body) = &operation.request_body {
        func = func.param(Param::new("requestBody", resolver.resolve(&body.shape, refs)));
    }
    if let Some(name) = &operation.query_params_type {
        let ty = TS_NAMING.type_ident(name);
        refs.record(&ty);
        let mut p = Param::new("queryParams", ty);
        if operation.query_params_optional {
            p = p.optional();
        }
        func = func.param(p);
    }
    if let Some(name) = &operation.header_params_type {
        let ty = TS_NAMING.type_ident(name);
        refs.record(&ty);
        let mut p = Param::new("headerParams", ty);
        if operation.header_params_optional {
            p = p.optional();
        }
        func = func.param(p);
    }
    func = func.param(Param::new("overrides", "RequestOverrides").optional());

    let is_get = operation.method == HttpMethod::Get;
    if is_get {
        runtime.insert("RequestHooks");
        func = func.param(
            Param::new("callbacks", format!("RequestHooks<{}>", response_ty)).optional(),
        );
    }

    if operation.deprecated {
        runtime.insert("__DEV__");
        let note = operation
            .deprecation_note
            .as_deref()
            .unwrap_or(DEPRECATION_MESSAGE);
        func = func.statement(CodeFragment::Block {
            header: "if (__DEV__) {".to_string(),
            body: vec![CodeFragment::Line(format!(
                "console.warn({}, {});",
                quoted(&ident),
                quoted(note)
            ))],
            close: Some("}".to_string()),
        });
    }

    let call = dispatch_call(operation, &ident, runtime);

    if is_get {
        let chain = PromiseChain::new(call)
            .link(
                ChainLink::new("then", "response")
                    .body_line("callbacks?.onSuccess?.(response);")
                    .body_line("return response;"),
            )
            .link(
                ChainLink::new("catch", "error")
                    .body_line("callbacks?.onError?.(error);")
                    .body_line("throw error;"),
            )
            .link(ChainLink::new("finally", "").body_line("callbacks?.onSettled?.();"));
        for fragment in chain.to_fragments() {
            func = func.statement(fragment);
        }
    } else {
        for fragment in call.to_fragments() {
            func = func.statement(fragment);
        }
    }

    func = func.key(&operation.path);

    let doc = DocComment::new()
        .description(operation.description.as_deref())
        .deprecated(operation.deprecated, operation.deprecation_note.as_deref());

    let mut builder = CodeBuilder::typescript();
    if let Some(fragment) = doc.fragment() {
        builder = builder.apply_fragment(fragment);
    }
    Ok(builder.emit(&func).build())
}

/// The single dispatcher invocation every function body reduces to.
fn dispatch_call(
    operation: &Operation,
    ident: &str,
    runtime: &mut BTreeSet<&'static str>,
) -> DispatchCall {
    let path_arg = if operation.has_path_params() {
        runtime.insert("template");
        let map = operation
            .path_params
            .iter()
            .fold(JsObject::new(), |o, p| {
                o.shorthand_or_pair(&p.name, TS_NAMING.field_ident(&p.name))
            });
        format!("template({}.key, {})", ident, map.build_inline())
    } else {
        format!("{}.key", ident)
    };

    let query_arg = if operation.query_params_type.is_some() {
        "queryParams"
    } else {
        "undefined"
    };

    let body_arg = match &operation.request_body {
        None => "undefined".to_string(),
        Some(_) => match &operation.content_type {
            ContentKind::Multipart => {
                runtime.insert("objToForm");
                "objToForm(requestBody)".to_string()
            }
            ContentKind::UrlEncoded => {
                runtime.insert("objToUrlencoded");
                "objToUrlencoded(requestBody)".to_string()
            }
            ContentKind::Json | ContentKind::Other(_) => "requestBody".to_string(),
        },
    };

    let security_arg = operation
        .security
        .clone()
        .unwrap_or_else(|| "undefined".to_string());

    let mut defaults = operation
        .call_options
        .iter()
        .fold(JsObject::new(), |o, (key, value)| o.json(key, value));
    if operation.header_params_type.is_some() {
        defaults = defaults.raw("headers", "headerParams");
    }
    let defaults_arg = if defaults.is_empty() {
        "undefined".to_string()
    } else {
        defaults.build_inline()
    };

    DispatchCall::new(format!("Http.{}Request", operation.method.as_str()))
        .arg(path_arg)
        .arg(query_arg)
        .arg(body_arg)
        .arg(security_arg)
        .arg(format!("overrideConfig({}, overrides)", defaults_arg))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tsugu_codegen::naming::contains_word;
    use tsugu_ir::{ParamLocation, Parameter, RequestBody, Shape};

    use super::*;

    fn path_param(name: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            required: true,
            shape: Shape::string(),
            description: None,
            location: ParamLocation::Path,
        }
    }

    fn get_pet() -> Operation {
        Operation {
            path_params: vec![path_param("id")],
            response: Some(Shape::reference("Pet")),
            ..Operation::new("getPet", HttpMethod::Get, "/pets/{id}")
        }
    }

    fn named(name: &str) -> NamedType {
        NamedType::new(name, Shape::string())
    }

    #[test]
    fn test_get_pet_end_to_end() {
        let out = render_services(&[get_pet()], &[named("Pet")], &Options::default());

        assert!(out.starts_with(AUTOGENERATED_HEADER));
        assert!(out.contains("import type { Pet } from \"./types\";"));
        assert!(out.contains(
            "export const getPet = async (\n  id: string,\n  overrides?: RequestOverrides,\n  callbacks?: RequestHooks<Pet>,\n): Promise<ResponseWrapper<Pet>> => {"
        ));
        assert!(out.contains("return Http.getRequest(\n    template(getPet.key, { id }),"));
        assert!(out.contains(".then((response) => {"));
        assert!(out.contains(".catch((error) => {"));
        assert!(out.contains(".finally(() => {"));
        assert!(out.contains("getPet.key = \"/pets/{id}\";"));
    }

    #[test]
    fn test_parameter_ordering() {
        let operation = Operation {
            path_params: vec![path_param("owner"), path_param("petId")],
            request_body: Some(RequestBody {
                shape: Shape::reference("NewPet"),
                required: true,
            }),
            query_params_type: Some("UpdatePetQueryParams".to_string()),
            query_params_optional: true,
            ..Operation::new("updatePet", HttpMethod::Put, "/owners/{owner}/pets/{petId}")
        };
        let out = render_services(
            &[operation],
            &[named("NewPet"), named("UpdatePetQueryParams")],
            &Options::default(),
        );

        assert!(out.contains(
            "export const updatePet = async (\n  owner: string,\n  petId: string,\n  requestBody: NewPet,\n  queryParams?: UpdatePetQueryParams,\n  overrides?: RequestOverrides,\n): Promise<ResponseWrapper<any>> => {"
        ));
        // Non-GET bodies return the dispatch directly, no callback bundle.
        assert!(!out.contains("callbacks"));
        assert!(out.contains("return Http.putRequest(\n"));
    }

    #[test]
    fn test_operations_sorted_by_service_name() {
        let ops = vec![
            Operation::new("zeta", HttpMethod::Get, "/zeta"),
            Operation::new("alpha", HttpMethod::Get, "/alpha"),
        ];
        let forward = render_services(&ops, &[], &Options::default());
        let reversed: Vec<Operation> = ops.iter().rev().cloned().collect();
        let backward = render_services(&reversed, &[], &Options::default());

        assert_eq!(forward, backward);
        assert!(forward.find("alpha").unwrap() < forward.find("zeta").unwrap());
    }

    #[test]
    fn test_import_pruning_excludes_substring_names() {
        // `Pet` is declared but only ever appears inside `PetList`.
        let operation = Operation {
            response: Some(Shape::reference("PetList")),
            ..Operation::new("listPets", HttpMethod::Get, "/pets")
        };
        let out = render_services(
            &[operation],
            &[named("Pet"), named("PetList")],
            &Options::default(),
        );

        assert!(out.contains("import type { PetList } from \"./types\";"));
        assert!(!out.contains("{ Pet }"));
        assert!(!out.contains("Pet,"));

        // The emitted body agrees with the lexical whole-word view.
        let body = out.split("from \"./types\";").nth(1).unwrap();
        assert!(contains_word(body, "PetList"));
        assert!(!contains_word(body, "Pet"));
    }

    #[test]
    fn test_deprecated_operation_warns_in_dev() {
        let operation = Operation {
            deprecated: true,
            deprecation_note: Some("use getPetV2".to_string()),
            ..get_pet()
        };
        let out = render_services(&[operation], &[named("Pet")], &Options::default());

        assert!(out.contains("if (__DEV__) {\n    console.warn(\"getPet\", \"use getPetV2\");\n  }"));
        assert!(out.contains("__DEV__"));
        assert!(out.contains("@deprecated use getPetV2"));
    }

    #[test]
    fn test_body_encoding_dispatch() {
        let base = Operation {
            request_body: Some(RequestBody {
                shape: Shape::reference("NewPet"),
                required: true,
            }),
            ..Operation::new("addPet", HttpMethod::Post, "/pets")
        };

        let json_out = render_services(&[base.clone()], &[named("NewPet")], &Options::default());
        assert!(json_out.contains("\n    requestBody,\n"));
        assert!(!json_out.contains("objToForm"));

        let multipart = Operation {
            content_type: ContentKind::Multipart,
            ..base.clone()
        };
        let multipart_out =
            render_services(&[multipart], &[named("NewPet")], &Options::default());
        assert!(multipart_out.contains("objToForm(requestBody),"));

        let form = Operation {
            content_type: ContentKind::UrlEncoded,
            ..base
        };
        let form_out = render_services(&[form], &[named("NewPet")], &Options::default());
        assert!(form_out.contains("objToUrlencoded(requestBody),"));
    }

    #[test]
    fn test_header_group_merges_into_call_options() {
        let operation = Operation {
            header_params_type: Some("AddPetHeaderParams".to_string()),
            call_options: [("timeout".to_string(), json!(5000))].into_iter().collect(),
            ..Operation::new("addPet", HttpMethod::Post, "/pets")
        };
        let out = render_services(
            &[operation],
            &[named("AddPetHeaderParams")],
            &Options::default(),
        );

        assert!(out.contains("headerParams: AddPetHeaderParams,"));
        assert!(out.contains(
            "overrideConfig({ timeout: 5000, headers: headerParams }, overrides),"
        ));
    }

    #[test]
    fn test_security_expression_passthrough() {
        let operation = Operation {
            security: Some("[{ api_key: [] }]".to_string()),
            ..Operation::new("addPet", HttpMethod::Post, "/pets")
        };
        let out = render_services(&[operation], &[], &Options::default());

        assert!(out.contains("\n    [{ api_key: [] }],\n"));
    }

    #[test]
    fn test_literal_path_without_params() {
        let out = render_services(
            &[Operation::new("listPets", HttpMethod::Get, "/pets")],
            &[],
            &Options::default(),
        );

        assert!(out.contains("return Http.getRequest(\n    listPets.key,\n"));
        assert!(!out.contains("template("));
        assert!(out.contains("listPets.key = \"/pets\";"));
    }

    #[test]
    fn test_missing_placeholder_fails_closed() {
        let operation = Operation {
            path_params: vec![path_param("id")],
            ..Operation::new("getPet", HttpMethod::Get, "/pets")
        };
        let out = render_services(&[operation], &[], &Options::default());
        assert_eq!(out, "");
    }

    #[test]
    fn test_dashed_path_param_keeps_wire_name_in_template() {
        let operation = Operation {
            path_params: vec![path_param("pet-id")],
            ..Operation::new("getPet", HttpMethod::Get, "/pets/{pet-id}")
        };
        let out = render_services(&[operation], &[], &Options::default());

        assert!(out.contains("petId: string,"));
        assert!(out.contains("template(getPet.key, { \"pet-id\": petId }),"));
    }
}
