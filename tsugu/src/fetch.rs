//! Source document retrieval.
//!
//! A document location is either an HTTP(S) URL or a local path. Retrieval
//! is blocking; the generator is a one-shot batch tool.

use std::path::Path;

use eyre::{Context, Result};

/// Fetch the text of a document from a URL or a file path, resolving
/// relative paths against `base`.
pub fn fetch_text(base: &Path, location: &str) -> Result<String> {
    if is_url(location) {
        log::debug!("fetching {}", location);
        let response = reqwest::blocking::get(location)
            .wrap_err_with(|| format!("failed to fetch {}", location))?
            .error_for_status()
            .wrap_err_with(|| format!("{} returned an error status", location))?;
        return response
            .text()
            .wrap_err_with(|| format!("failed to read the body of {}", location));
    }

    let path = base.join(location);
    std::fs::read_to_string(&path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/openapi.json"));
        assert!(is_url("http://localhost:8080/openapi.json"));
        assert!(!is_url("./openapi.json"));
        assert!(!is_url("openapi.json"));
    }

    #[test]
    fn test_reads_local_file_relative_to_base() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("openapi.json"), "{}").unwrap();

        let text = fetch_text(temp.path(), "openapi.json").unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(fetch_text(temp.path(), "nope.json").is_err());
    }
}
