//! Project-level generation driver.

use std::path::Path;

use eyre::Result;
use tsugu_codegen::{GeneratedFile, PreviewFile, WriteResult};
use tsugu_ir::{Hub, Project};

use crate::{
    Options, api_module,
    files::{ConfigFile, HttpRequestFile, HubFile, ServicesFile, TypesFile},
    hub_module, types_module,
};

/// Drives both emitters over a project and manages the output files.
pub struct Generator<'a> {
    project: &'a Project,
    hub: Option<&'a Hub>,
    base_url: String,
    options: Options,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project, options: Options) -> Self {
        Self {
            project,
            hub: None,
            base_url: String::new(),
            options,
        }
    }

    /// Also emit a hub module for the given hub description.
    pub fn with_hub(mut self, hub: &'a Hub) -> Self {
        self.hub = Some(hub);
        self
    }

    /// Base URL seeded into the create-once config file.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        let mut files: Vec<Box<dyn GeneratedFile>> = vec![
            Box::new(TypesFile(types_module::render_types(
                &self.project.types,
                &self.options,
            ))),
            Box::new(ServicesFile(api_module::render_services(
                &self.project.operations,
                &self.project.types,
                &self.options,
            ))),
            Box::new(HttpRequestFile),
            Box::new(ConfigFile::new(&self.base_url)),
        ];
        if let Some(hub) = self.hub {
            files.push(Box::new(HubFile(hub_module::render_hub(hub, &self.options))));
        }
        files
    }

    /// Render every output file without touching disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|f| f.preview(Path::new("")))
            .collect()
    }

    /// Write every output file into `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files() {
            let path = file.path(output_dir).display().to_string();
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }
        Ok(result)
    }
}

/// Result of one generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written this run.
    pub written: Vec<String>,
    /// Files left alone (create-once seeds that already existed).
    pub skipped: Vec<String>,
}
