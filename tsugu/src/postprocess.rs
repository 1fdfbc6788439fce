//! External formatter and transpiler hand-off.
//!
//! Both steps shell out to the project's own toolchain and are
//! best-effort: a missing `npx` never fails a generation run, it only
//! leaves the output unformatted (or, for the JavaScript dialect, still in
//! TypeScript, which is reported as an error).

use std::path::Path;
use std::process::Command;

use eyre::{Result, eyre};

/// Format the given generated files with prettier, when available.
pub fn run_prettier(base: &Path, files: &[String], config: Option<&Path>) {
    let mut command = Command::new("npx");
    command.arg("prettier").arg("--write");
    if let Some(config) = config {
        command.arg("--config").arg(config);
    }
    command.args(files).current_dir(base);

    match command.status() {
        Ok(status) if status.success() => {}
        Ok(status) => log::warn!("prettier exited with {}", status),
        Err(error) => log::debug!("prettier unavailable, skipping formatting: {}", error),
    }
}

/// Transpile the generated TypeScript modules to JavaScript with `tsc`,
/// then drop the TypeScript sources that were transpiled.
pub fn transpile_to_javascript(base: &Path, files: &[String]) -> Result<()> {
    let status = Command::new("npx")
        .arg("tsc")
        .args(files)
        .args(["--declaration", "--skipLibCheck", "--target", "esnext", "--module", "esnext"])
        .arg("--outDir")
        .arg(".")
        .current_dir(base)
        .status()
        .map_err(|error| eyre!("failed to launch tsc: {}", error))?;

    if !status.success() {
        return Err(eyre!("tsc exited with {}", status));
    }

    for file in files {
        let path = base.join(file);
        if path.extension().is_some_and(|ext| ext == "ts") {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}
