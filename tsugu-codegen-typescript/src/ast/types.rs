//! Type declaration builders: aliases, interfaces, and enums.

use tsugu_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::object_key;

/// Builder for `export type Name = <expr>;` declarations.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Build the alias as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, self.ty
        ))]
    }
}

/// A member of an interface declaration.
///
/// The key is the raw wire name: it is quoted in the output when it is not
/// a plain identifier, never renamed.
#[derive(Debug, Clone)]
pub struct Field {
    pub key: String,
    pub ty: String,
    pub optional: bool,
    pub doc: Option<String>,
}

impl Field {
    pub fn new(key: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ty: ty.into(),
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn render(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {};", object_key(&self.key), marker, self.ty)
    }
}

/// Builder for `export interface Name { ... }` declarations.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<Field>,
    /// Catch-all index signature type for unlisted keys.
    catch_all: Option<String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            catch_all: None,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn catch_all(mut self, ty: impl Into<String>) -> Self {
        self.catch_all = Some(ty.into());
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for field in &self.fields {
            if let Some(doc) = &field.doc {
                body.push(CodeFragment::JsDoc(doc.clone()));
            }
            body.push(CodeFragment::Line(field.render()));
        }
        if let Some(ty) = &self.catch_all {
            body.push(CodeFragment::Line(format!("[key: string]: {};", ty)));
        }

        if body.is_empty() {
            vec![CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            ))]
        } else {
            vec![CodeFragment::Block {
                header: format!("export interface {} {{", self.name),
                body,
                close: Some("}".to_string()),
            }]
        }
    }
}

/// One enum member: identifier plus rendered literal value.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub ident: String,
    pub literal: String,
}

/// Builder for `export enum Name { ... }` declarations.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    name: String,
    members: Vec<EnumMember>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, ident: impl Into<String>, literal: impl Into<String>) -> Self {
        self.members.push(EnumMember {
            ident: ident.into(),
            literal: literal.into(),
        });
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().emit(self).build()
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::Line(format!(
                "export enum {} {{}}",
                self.name
            ))];
        }

        let body = self
            .members
            .iter()
            .map(|m| CodeFragment::Line(format!("{} = {},", m.ident, m.literal)))
            .collect();

        vec![CodeFragment::Block {
            header: format!("export enum {} {{", self.name),
            body,
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("PetId", "number").build();
        assert_eq!(t, "export type PetId = number;\n");
    }

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Pet")
            .field(Field::new("id", "number"))
            .field(Field::new("name", "string").optional())
            .build();
        assert_eq!(
            i,
            "export interface Pet {\n  id: number;\n  name?: string;\n}\n"
        );
    }

    #[test]
    fn test_interface_quotes_non_identifier_keys() {
        let i = Interface::new("Headers")
            .field(Field::new("x-request-id", "string"))
            .build();
        assert!(i.contains("\"x-request-id\": string;"));
    }

    #[test]
    fn test_interface_catch_all() {
        let i = Interface::new("Bag").catch_all("number").build();
        assert_eq!(i, "export interface Bag {\n  [key: string]: number;\n}\n");
    }

    #[test]
    fn test_interface_field_doc() {
        let i = Interface::new("Pet")
            .field(Field::new("id", "number").doc("Unique id."))
            .build();
        assert!(i.contains("/** Unique id. */\n  id: number;"));
    }

    #[test]
    fn test_enum_decl() {
        let e = EnumDecl::new("Status")
            .member("Available", "\"available\"")
            .member("Pending", "\"pending\"")
            .build();
        assert_eq!(
            e,
            "export enum Status {\n  Available = \"available\",\n  Pending = \"pending\",\n}\n"
        );
    }

    #[test]
    fn test_numeric_enum_member() {
        let e = EnumDecl::new("Code").member("Value0", "0").build();
        assert!(e.contains("Value0 = 0,"));
    }
}
