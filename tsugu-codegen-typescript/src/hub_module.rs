//! The real-time hub module emitter.
//!
//! A much simpler sibling of the services emitter: one flat pass over the
//! hub description, no per-entry diagnostics, no import pruning beyond the
//! reference tracker. Produces a typed wrapper class around a SignalR
//! connection.

use tsugu_codegen::{
    CodeBuilder, CodeFragment, ReferenceTracker,
    naming::{ascending, to_pascal_case},
};
use tsugu_ir::{Hub, HubMethod};

use crate::{
    AUTOGENERATED_HEADER, Options,
    ast::Import,
    naming::TS_NAMING,
    resolver::{Resolver, quoted},
};

/// Render the complete hub module.
pub fn render_hub(hub: &Hub, options: &Options) -> String {
    let resolver = Resolver::new(options);
    let mut refs = ReferenceTracker::new();

    let class_name = hub_class_name(&hub.path);

    let mut methods: Vec<&HubMethod> = hub.methods.iter().collect();
    methods.sort_by(|a, b| ascending(&a.name, &b.name));
    let mut callbacks: Vec<&HubMethod> = hub.callbacks.iter().collect();
    callbacks.sort_by(|a, b| ascending(&a.name, &b.name));

    let mut body = vec![
        CodeFragment::Line("readonly connection: HubConnection;".to_string()),
        CodeFragment::Blank,
        CodeFragment::Block {
            header: "constructor(baseUrl: string) {".to_string(),
            body: vec![
                CodeFragment::Line("this.connection = new HubConnectionBuilder()".to_string()),
                CodeFragment::Indent(vec![
                    CodeFragment::Line(format!(".withUrl(baseUrl + {})", quoted(&hub.path))),
                    CodeFragment::Line(".withAutomaticReconnect()".to_string()),
                    CodeFragment::Line(".build();".to_string()),
                ]),
            ],
            close: Some("}".to_string()),
        },
        CodeFragment::Blank,
        method_block("start", "", "Promise<void>", "return this.connection.start();"),
        CodeFragment::Blank,
        method_block("stop", "", "Promise<void>", "return this.connection.stop();"),
    ];

    for method in methods {
        body.push(CodeFragment::Blank);
        body.push(invoke_block(method, resolver, &mut refs));
    }
    for callback in callbacks {
        body.push(CodeFragment::Blank);
        body.push(callback_block(callback, resolver, &mut refs));
    }

    let class = CodeFragment::Block {
        header: format!("export class {} {{", class_name),
        body,
        close: Some("}".to_string()),
    };

    let mut builder = CodeBuilder::typescript().raw(AUTOGENERATED_HEADER).blank();
    builder = builder.emit(
        &Import::new("@microsoft/signalr")
            .named("HubConnection")
            .named("HubConnectionBuilder"),
    );
    if !refs.is_empty() {
        builder = builder.emit(&Import::new("./types").named_all(refs.names()).type_only());
    }
    builder.blank().apply_fragment(class).build()
}

fn hub_class_name(path: &str) -> String {
    let segment = path
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or("api");
    format!("{}Hub", to_pascal_case(segment))
}

fn method_block(name: &str, params: &str, ret: &str, body: &str) -> CodeFragment {
    CodeFragment::Block {
        header: format!("{}({}): {} {{", name, params, ret),
        body: vec![CodeFragment::Line(body.to_string())],
        close: Some("}".to_string()),
    }
}

fn invoke_block(
    method: &HubMethod,
    resolver: Resolver<'_>,
    refs: &mut ReferenceTracker,
) -> CodeFragment {
    let ident = TS_NAMING.field_ident(&method.name);
    let params: Vec<String> = method
        .params
        .iter()
        .map(|p| {
            format!(
                "{}: {}",
                TS_NAMING.field_ident(&p.name),
                resolver.resolve(&p.shape, refs)
            )
        })
        .collect();
    let args: Vec<String> = method
        .params
        .iter()
        .map(|p| TS_NAMING.field_ident(&p.name))
        .collect();

    let (generic, ret) = match &method.response {
        Some(shape) => {
            let ty = resolver.resolve(shape, refs);
            (format!("<{}>", ty), format!("Promise<{}>", ty))
        }
        None => (String::new(), "Promise<void>".to_string()),
    };

    let mut invoke_args = vec![quoted(&method.name)];
    invoke_args.extend(args);

    method_block(
        &ident,
        &params.join(", "),
        &ret,
        &format!(
            "return this.connection.invoke{}({});",
            generic,
            invoke_args.join(", ")
        ),
    )
}

fn callback_block(
    callback: &HubMethod,
    resolver: Resolver<'_>,
    refs: &mut ReferenceTracker,
) -> CodeFragment {
    let handler_params: Vec<String> = callback
        .params
        .iter()
        .map(|p| {
            format!(
                "{}: {}",
                TS_NAMING.field_ident(&p.name),
                resolver.resolve(&p.shape, refs)
            )
        })
        .collect();

    method_block(
        &format!("on{}", to_pascal_case(&callback.name)),
        &format!("handler: ({}) => void", handler_params.join(", ")),
        "void",
        &format!("this.connection.on({}, handler);", quoted(&callback.name)),
    )
}

#[cfg(test)]
mod tests {
    use tsugu_ir::{HubParam, Shape};

    use super::*;

    fn hub() -> Hub {
        Hub {
            path: "/hubs/notifications".to_string(),
            methods: vec![HubMethod {
                name: "sendMessage".to_string(),
                params: vec![
                    HubParam {
                        name: "user".to_string(),
                        shape: Shape::string(),
                    },
                    HubParam {
                        name: "message".to_string(),
                        shape: Shape::reference("Message"),
                    },
                ],
                response: None,
            }],
            callbacks: vec![HubMethod {
                name: "messageReceived".to_string(),
                params: vec![HubParam {
                    name: "message".to_string(),
                    shape: Shape::reference("Message"),
                }],
                response: None,
            }],
        }
    }

    #[test]
    fn test_hub_class_shape() {
        let out = render_hub(&hub(), &Options::default());

        assert!(out.starts_with(AUTOGENERATED_HEADER));
        assert!(out.contains(
            "import { HubConnection, HubConnectionBuilder } from \"@microsoft/signalr\";"
        ));
        assert!(out.contains("import type { Message } from \"./types\";"));
        assert!(out.contains("export class NotificationsHub {"));
        assert!(out.contains(".withUrl(baseUrl + \"/hubs/notifications\")"));
        assert!(out.contains("start(): Promise<void> {"));
    }

    #[test]
    fn test_invoke_method() {
        let out = render_hub(&hub(), &Options::default());
        assert!(out.contains(
            "sendMessage(user: string, message: Message): Promise<void> {\n    return this.connection.invoke(\"sendMessage\", user, message);\n  }"
        ));
    }

    #[test]
    fn test_callback_registrar() {
        let out = render_hub(&hub(), &Options::default());
        assert!(out.contains(
            "onMessageReceived(handler: (message: Message) => void): void {\n    this.connection.on(\"messageReceived\", handler);\n  }"
        ));
    }

    #[test]
    fn test_typed_invocation_result() {
        let mut h = hub();
        h.methods.push(HubMethod {
            name: "loadHistory".to_string(),
            params: vec![],
            response: Some(Shape::array(Shape::reference("Message"))),
        });
        let out = render_hub(&h, &Options::default());
        assert!(out.contains(
            "loadHistory(): Promise<Message[]> {\n    return this.connection.invoke<Message[]>(\"loadHistory\");\n  }"
        ));
    }

    #[test]
    fn test_class_name_from_path() {
        assert_eq!(hub_class_name("/hubs/notifications"), "NotificationsHub");
        assert_eq!(hub_class_name("/chat"), "ChatHub");
        assert_eq!(hub_class_name(""), "ApiHub");
    }
}
