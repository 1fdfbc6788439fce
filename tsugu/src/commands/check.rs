use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsugu_codegen_typescript::{api_module, types_module};
use tsugu_openapi::{extract, load_document};

use super::UnwrapOrExit;
use crate::{config::Config, fetch};

#[derive(Args)]
pub struct CheckCommand {
    /// Project directory containing tsugu.config.json (defaults to .)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::load_from(&self.project)?;

        let text = fetch::fetch_text(&self.project, &config.url)?;
        let document = load_document(&text, &config.url).unwrap_or_exit();
        let api = extract(&document);

        println!(
            "{}: {} named types, {} operations",
            config.url,
            api.types.len(),
            api.operations.len()
        );

        // Dry-run both emitters; a fail-closed empty module means the
        // document carries entries the emitters refuse.
        let options = config.options();
        let types_out = types_module::render_types(&api.types, &options);
        let services_out = api_module::render_services(&api.operations, &api.types, &options);

        let mut failed = false;
        if types_out.is_empty() && !api.types.is_empty() {
            eprintln!("error: the types module fails to emit");
            failed = true;
        }
        if services_out.is_empty() && !api.operations.is_empty() {
            eprintln!("error: the services module fails to emit");
            failed = true;
        }

        if failed {
            eprintln!("rerun with RUST_LOG=error for per-entry details");
            std::process::exit(1);
        }

        println!("OK");
        Ok(())
    }
}
