//! Errors, warnings and notes collected while running the pipeline.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stops the pipeline at the end of the current phase.
    Error,
    /// Reported, but projection goes on.
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A message produced by one pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the phase that produced it.
    pub phase: String,
    pub message: String,
    /// Dotted location, e.g. `models.Car` or `models.Car.name`.
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    /// Attach a location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag =
            Diagnostic::warning("project", "schema 'Vehicle' is polymorphic").at("models.Car");
        assert_eq!(
            diag.to_string(),
            "warning: schema 'Vehicle' is polymorphic (at models.Car)"
        );
        assert_eq!(Diagnostic::error("validate", "bad").to_string(), "error: bad");
    }

    #[test]
    fn test_severity_predicates() {
        assert!(Diagnostic::error("validate", "x").severity.is_error());
        assert!(Diagnostic::warning("validate", "x").severity.is_warning());
        assert!(!Severity::Info.is_error());
        assert!(!Severity::Info.is_warning());
    }

    #[test]
    fn test_diagnostic_serializes_lowercase_severity() {
        let diag = Diagnostic::info("validate", "note").at("models.Car.name");
        let json = serde_json::to_string(&diag).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"severity":"info","phase":"validate","message":"note","location":"models.Car.name"}"#
        );
    }
}
