//! Generated-file write rules.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file to disk.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }

    /// Preview the file without touching disk.
    fn preview(&self, base: &Path) -> PreviewFile {
        PreviewFile {
            path: self.path(base).display().to_string(),
            content: self.render(),
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was skipped (already exists).
    Skipped,
}

/// Rules that determine how a file should be written.
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Always regenerate.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Seed once, then leave the user's copy alone.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (regenerated modules).
    #[default]
    Always,
    /// Only create if the file doesn't exist (user-editable seeds).
    IfMissing,
}

/// A rendered file for dry-run display.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        name: &'static str,
        content: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for Fixture {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules.clone()
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.ts");
        fs::write(&path, "original").unwrap();

        let file = Fixture {
            name: "out.ts",
            content: "updated",
            rules: FileRules::always(),
        };
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_create_once_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ts");
        fs::write(&path, "user edited").unwrap();

        let file = Fixture {
            name: "config.ts",
            content: "seed",
            rules: FileRules::create_once(),
        };
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "user edited");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();

        let file = Fixture {
            name: "nested/dir/out.ts",
            content: "content",
            rules: FileRules::always(),
        };
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert!(temp.path().join("nested/dir/out.ts").exists());
    }
}
