//! OpenAPI document handling for the tsugu client generator.
//!
//! Parses API documents, gates on the declared version, and lowers them
//! into the [`tsugu_ir`] types the emitters consume:
//!
//! ```ignore
//! use tsugu_openapi::{Document, extract, version};
//!
//! let document = Document::from_file(Path::new("openapi.json"))?;
//! version::ensure_supported(document.openapi.as_deref())?;
//! let project = extract::extract(&document);
//! ```
//!
//! Validating documents against the OpenAPI meta-schema is out of scope;
//! unknown fields are ignored and malformed shapes degrade at emission
//! time instead of failing here.

pub mod document;
pub mod error;
pub mod extract;
pub mod version;

pub use document::{Document, HubDocument, SchemaObject};
pub use error::{Error, Result};
pub use extract::{extract, extract_hub};

/// Parse a document from JSON text and gate on its declared version.
pub fn load_document(text: &str, filename: &str) -> Result<Document> {
    let document = Document::from_str(text, filename)?;
    version::ensure_supported(document.openapi.as_deref())?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_document_rejects_swagger_2() {
        let err = load_document(r#"{ "swagger": "2.0", "paths": {} }"#, "swagger.json")
            .unwrap_err();
        assert!(err.to_string().contains("unsupported document version"));
    }

    #[test]
    fn test_load_document_accepts_openapi_3() {
        let document = load_document(r#"{ "openapi": "3.0.1", "paths": {} }"#, "openapi.json");
        assert!(document.is_ok());
    }
}
