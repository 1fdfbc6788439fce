//! Document version gate.

use crate::error::{Error, Result};

/// Lowest supported major version.
const MIN_MAJOR: u32 = 3;

/// Reject documents below OpenAPI 3.0.
///
/// `None` means the document never declared an `openapi` field, which is
/// what Swagger 2.x documents look like.
pub fn ensure_supported(version: Option<&str>) -> Result<()> {
    let declared = version.unwrap_or("");
    let major = declared
        .split('.')
        .next()
        .and_then(|part| part.parse::<u32>().ok());

    match major {
        Some(major) if major >= MIN_MAJOR => Ok(()),
        _ => Err(Error::unsupported_version(if declared.is_empty() {
            "(missing)"
        } else {
            declared
        })),
    }
}
