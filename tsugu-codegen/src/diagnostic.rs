//! Emission diagnostics.
//!
//! Emitters build each module entry as a `Result<String, Diagnostic>`. The
//! module boundary aggregates with [`collect_entries`]: one failed entry
//! fails the whole pass, so a module is either complete or empty, never
//! partial. The choice to abort-on-any-failure lives here, explicitly,
//! instead of inside a broad catch.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A fault that aborts the emission pass.
    Error,
    /// A condition worth surfacing that does not abort the pass.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic produced while emitting one module entry.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The emission stage that produced this diagnostic (e.g. "types",
    /// "services").
    pub stage: String,
    pub message: String,
    /// The entry being emitted (type or service name), when known.
    pub entry: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            stage: stage.into(),
            message: message.into(),
            entry: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            stage: stage.into(),
            message: message.into(),
            entry: None,
        }
    }

    /// Attach the entry name this diagnostic belongs to.
    pub fn at(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.stage, self.message)?;
        if let Some(entry) = &self.entry {
            write!(f, " (at {})", entry)?;
        }
        Ok(())
    }
}

/// Aggregate per-entry results at the module boundary.
///
/// Returns every entry text when all succeeded, or every diagnostic when
/// any failed. Callers log the diagnostics and emit an empty module.
pub fn collect_entries(
    results: impl IntoIterator<Item = Result<String, Diagnostic>>,
) -> Result<Vec<String>, Vec<Diagnostic>> {
    let mut texts = Vec::new();
    let mut faults = Vec::new();

    for result in results {
        match result {
            Ok(text) => texts.push(text),
            Err(diagnostic) => faults.push(diagnostic),
        }
    }

    if faults.is_empty() {
        Ok(texts)
    } else {
        Err(faults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("types", "unresolvable entry").at("Pet");
        assert_eq!(diag.to_string(), "error[types]: unresolvable entry (at Pet)");
    }

    #[test]
    fn test_collect_all_ok() {
        let entries = vec![Ok("a".to_string()), Ok("b".to_string())];
        assert_eq!(collect_entries(entries).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_collect_aborts_on_any_failure() {
        let entries = vec![
            Ok("a".to_string()),
            Err(Diagnostic::error("types", "boom").at("B")),
            Ok("c".to_string()),
        ];
        let faults = collect_entries(entries).unwrap_err();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].entry.as_deref(), Some("B"));
    }
}
