//! Generator configuration (`tsugu.config.json`).

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use serde::Deserialize;
use tsugu_codegen_typescript::{Dialect, EnumStyle, Options};

/// Configuration filename probed in the project directory.
pub const CONFIG_FILE: &str = "tsugu.config.json";

/// Filename probed for backward compatibility with v1 projects.
pub const LEGACY_CONFIG_FILE: &str = "tsuguConfig.json";

/// Output dialect selector as it appears in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Typescript,
    Javascript,
}

/// Parsed `tsugu.config.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Source document location: a URL or a local path.
    pub url: String,
    /// Output directory for generated sources, relative to the project.
    pub dir: PathBuf,
    /// Output dialect.
    pub language: Language,
    /// Optional hub description document location.
    pub hub: Option<String>,
    /// Optional prettier config path; generated files are formatted with
    /// it when present.
    pub prettier_path: Option<PathBuf>,
    /// Emit enums as literal-union aliases instead of enum declarations.
    pub generate_enum_as_type: bool,
    /// Legacy property-nullability mode (`T | undefined` instead of `?`).
    pub legacy_optional_properties: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            dir: PathBuf::from("src/api"),
            language: Language::Typescript,
            hub: None,
            prettier_path: None,
            generate_enum_as_type: false,
            legacy_optional_properties: false,
        }
    }
}

impl Config {
    /// Load the config from a project directory, probing the legacy
    /// filename before giving up.
    pub fn load_from(base: &Path) -> Result<Self> {
        let primary = base.join(CONFIG_FILE);
        if primary.exists() {
            return Self::read(&primary);
        }

        let legacy = base.join(LEGACY_CONFIG_FILE);
        if legacy.exists() {
            log::warn!(
                "using legacy {}; rename it to {}",
                LEGACY_CONFIG_FILE,
                CONFIG_FILE
            );
            return Self::read(&legacy);
        }

        Err(eyre!(
            "no {} found in {}; run `tsugu init` to create one",
            CONFIG_FILE,
            base.display()
        ))
    }

    fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?;

        if config.url.is_empty() {
            return Err(eyre!("{} does not set `url`", path.display()));
        }
        Ok(config)
    }

    /// Lower the file-level settings into emitter options.
    pub fn options(&self) -> Options {
        Options {
            enum_style: if self.generate_enum_as_type {
                EnumStyle::Union
            } else {
                EnumStyle::Declaration
            },
            dialect: match self.language {
                Language::Typescript => Dialect::TypeScript,
                Language::Javascript => Dialect::JavaScript,
            },
            legacy_optional: self.legacy_optional_properties,
        }
    }
}
