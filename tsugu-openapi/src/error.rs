use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for document operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the document path in tsugu.config.json exists"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse the API document")]
    #[diagnostic(code(tsugu::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported document version '{version}'")]
    #[diagnostic(
        code(tsugu::unsupported_version),
        help("tsugu consumes OpenAPI 3.0 or newer; convert Swagger 2.x documents first")
    )]
    UnsupportedVersion { version: String },

    #[error("{message}")]
    #[diagnostic(code(tsugu::validation_error))]
    Validation { message: String },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_of(&source, src);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a version error
    pub fn unsupported_version(version: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedVersion {
            version: version.into(),
        })
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Validation {
            message: message.into(),
        })
    }
}

fn span_of(error: &serde_json::Error, src: &str) -> Option<SourceSpan> {
    if error.line() == 0 {
        return None;
    }
    let offset = SourceOffset::from_location(src, error.line(), error.column());
    Some(SourceSpan::from((offset.offset(), 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_span() {
        let src = "{\n  \"openapi\": oops\n}";
        let json_err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::parse(json_err, src, "openapi.json");

        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn test_version_error_message() {
        let err = Error::unsupported_version("2.0");
        assert_eq!(err.to_string(), "unsupported document version '2.0'");
    }
}
