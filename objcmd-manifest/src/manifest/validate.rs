//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest tables, so validation errors can point at the
/// offending value.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "objcmd.toml").push("project");
/// ctx.validate_identifier("noun_prefix", "Az", "noun prefix")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["project"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "noun prefix in 'project'" or just "noun prefix" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a string value assigned to `key`.
    pub fn find_value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Validate that a value is a valid identifier.
    pub fn validate_identifier(&self, key: &str, value: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(value) {
            return Err(self.source.invalid_identifier_error(
                value,
                self.context_for(kind),
                reason,
                self.find_value_span(key, value),
            ));
        }
        Ok(())
    }

    /// Validate that a string value is not blank.
    pub fn validate_non_empty(&self, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            let message = format!("'{}' must not be empty", self.qualified(key));
            return Err(self
                .source
                .validation_error(message, self.find_value_span(key, value)));
        }
        Ok(())
    }

    fn qualified(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path_string(), key)
        }
    }
}

/// Find the span of a string value in the TOML source.
///
/// Searches for `key = "value"` with either quote style and spacing.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{}=\"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}='{}'", key, value),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // Value starts after the opening quote
            let start = pos + pattern.len() - value.len() - 1;
            return Some(SourceSpan::from((start, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is an identifier: an ASCII letter followed by
/// letters, digits or underscores.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("name must start with a letter"),
    }

    if chars.any(|c| !c.is_ascii_alphanumeric() && c != '_') {
        return Some("name contains invalid characters");
    }

    None
}
