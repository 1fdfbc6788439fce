//! The user-editable `config.ts` seed.
//!
//! Written once with the document's first server URL substituted in, then
//! never touched again: the runtime reads its base URL and headers from
//! here, so regeneration must not clobber user edits.

use std::path::{Path, PathBuf};

use tsugu_codegen::{FileRules, GeneratedFile};

/// The `config.ts` seed file.
pub struct ConfigFile {
    base_url: String,
}

impl ConfigFile {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl GeneratedFile for ConfigFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("config.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CONFIG.replace("{{baseUrl}}", &self.base_url)
    }
}

const CONFIG: &str = r#"export const baseConfig = {
  baseUrl: "{{baseUrl}}",
  headers: {} as Record<string, string>,
  /** Supply an access token for operations that declare a security scheme. */
  getToken: undefined as (() => string | undefined) | undefined,
};
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_base_url() {
        let content = ConfigFile::new("https://petstore.example.com/v2").render();
        assert!(content.contains("baseUrl: \"https://petstore.example.com/v2\","));
        assert!(!content.contains("{{baseUrl}}"));
    }

    #[test]
    fn test_is_seeded_once() {
        let rules = ConfigFile::new("").rules();
        assert_eq!(rules.overwrite, tsugu_codegen::Overwrite::IfMissing);
    }
}
