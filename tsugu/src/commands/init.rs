use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result, eyre};

use crate::config::CONFIG_FILE;

#[derive(Args)]
pub struct InitCommand {
    /// Document URL or path (prompted when omitted)
    #[arg(long)]
    pub url: Option<String>,

    /// Output directory for generated sources (prompted when omitted)
    #[arg(long)]
    pub dir: Option<String>,

    /// Project directory to initialize (defaults to .)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.project.join(CONFIG_FILE);
        if path.exists() {
            return Err(eyre!("{} already exists", path.display()));
        }

        let url = match &self.url {
            Some(url) => url.clone(),
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("OpenAPI document URL or path")
                .interact_text()
                .wrap_err("Failed to read the document location")?,
        };

        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Output directory")
                .default("src/api".to_string())
                .interact_text()
                .wrap_err("Failed to read the output directory")?,
        };

        let config = serde_json::json!({
            "url": url,
            "dir": dir,
            "language": "typescript",
        });

        std::fs::create_dir_all(&self.project)
            .wrap_err_with(|| format!("failed to create {}", self.project.display()))?;
        std::fs::write(&path, format!("{}\n", serde_json::to_string_pretty(&config)?))
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  tsugu generate");

        Ok(())
    }
}
