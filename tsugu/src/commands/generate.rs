use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use tsugu_codegen_typescript::{Dialect, Generator};
use tsugu_openapi::{Document, HubDocument, extract, extract_hub, load_document};

use super::UnwrapOrExit;
use crate::{config::Config, fetch, postprocess};

/// Output files a generation run can leave in the output directory.
const MODULE_FILES: [&str; 5] = [
    "types.ts",
    "services.ts",
    "httpRequest.ts",
    "config.ts",
    "hub.ts",
];

#[derive(Args)]
pub struct GenerateCommand {
    /// Project directory containing tsugu.config.json (defaults to .)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load_from(&self.project)?;

        let text = fetch::fetch_text(&self.project, &config.url)?;
        let document = load_document(&text, &config.url).unwrap_or_exit();
        let api = extract(&document);

        let hub = match &config.hub {
            Some(location) => {
                let text = fetch::fetch_text(&self.project, location)?;
                let hub_document = HubDocument::from_str(&text, location).unwrap_or_exit();
                Some(extract_hub(&hub_document))
            }
            None => None,
        };

        let mut generator =
            Generator::new(&api, config.options()).with_base_url(document.base_url());
        if let Some(hub) = &hub {
            generator = generator.with_hub(hub);
        }

        if self.dry_run {
            return Self::run_preview(&generator);
        }
        self.run_generation(&generator, &config, &document)
    }

    fn run_generation(
        &self,
        generator: &Generator,
        config: &Config,
        document: &Document,
    ) -> Result<()> {
        let out_dir = self.project.join(&config.dir);
        let result = generator
            .generate(&out_dir)
            .wrap_err("Failed to generate client")?;

        // Print header
        if let Some(title) = &document.info.title {
            let version = document.info.version.as_deref().unwrap_or("");
            println!("{} {}", title, version);
            println!();
        }

        println!("Generated: {}", out_dir.display());
        for path in &result.written {
            println!("  + {}", path);
        }
        for path in &result.skipped {
            println!("  = {} (kept)", path);
        }

        self.postprocess(config, &out_dir)
    }

    fn postprocess(&self, config: &Config, out_dir: &Path) -> Result<()> {
        let mut outputs: Vec<String> = MODULE_FILES
            .iter()
            .filter(|name| out_dir.join(name).exists())
            .map(|name| name.to_string())
            .collect();

        if config.options().dialect == Dialect::JavaScript {
            postprocess::transpile_to_javascript(out_dir, &outputs)
                .wrap_err("Failed to transpile the generated client to JavaScript")?;
            outputs = outputs
                .iter()
                .flat_map(|name| {
                    let stem = name.trim_end_matches(".ts");
                    [format!("{}.js", stem), format!("{}.d.ts", stem)]
                })
                .filter(|name| out_dir.join(name).exists())
                .collect();
        }

        postprocess::run_prettier(out_dir, &outputs, config.prettier_path.as_deref());
        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
