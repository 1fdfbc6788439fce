//! Exported async arrow-function builder.

use tsugu_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a generated function signature.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn render(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {},", self.name, marker, self.ty)
    }
}

/// Builder for `export const name = async (...) => { ... };` with an
/// optional route-key static attached after the declaration.
#[derive(Debug, Clone)]
pub struct ArrowFnConst {
    name: String,
    params: Vec<Param>,
    return_type: String,
    body: Vec<CodeFragment>,
    key: Option<String>,
}

impl ArrowFnConst {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: return_type.into(),
            body: Vec::new(),
            key: None,
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a fragment to the function body.
    pub fn statement(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Expose the raw endpoint path as `<name>.key = "<path>";`.
    pub fn key(mut self, path: impl Into<String>) -> Self {
        self.key = Some(path.into());
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }
}

impl Renderable for ArrowFnConst {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if self.params.is_empty() {
            fragments.push(CodeFragment::Block {
                header: format!(
                    "export const {} = async (): {} => {{",
                    self.name, self.return_type
                ),
                body: self.body.clone(),
                close: Some("};".to_string()),
            });
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("export const {} = async (", self.name),
                body: self
                    .params
                    .iter()
                    .map(|p| CodeFragment::Line(p.render()))
                    .collect(),
                close: None,
            });
            fragments.push(CodeFragment::Block {
                header: format!("): {} => {{", self.return_type),
                body: self.body.clone(),
                close: Some("};".to_string()),
            });
        }

        if let Some(key) = &self.key {
            fragments.push(CodeFragment::Line(format!(
                "{}.key = \"{}\";",
                self.name, key
            )));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params() {
        let f = ArrowFnConst::new("ping", "Promise<void>")
            .statement(CodeFragment::Line("return;".to_string()))
            .build();
        assert_eq!(
            f,
            "export const ping = async (): Promise<void> => {\n  return;\n};\n"
        );
    }

    #[test]
    fn test_params_render_multiline() {
        let f = ArrowFnConst::new("getPet", "Promise<Pet>")
            .param(Param::new("id", "string"))
            .param(Param::new("overrides", "RequestOverrides").optional())
            .build();
        assert_eq!(
            f,
            "export const getPet = async (\n  id: string,\n  overrides?: RequestOverrides,\n): Promise<Pet> => {\n};\n"
        );
    }

    #[test]
    fn test_route_key() {
        let f = ArrowFnConst::new("getPet", "Promise<Pet>")
            .key("/pets/{id}")
            .build();
        assert!(f.ends_with("getPet.key = \"/pets/{id}\";\n"));
    }
}
