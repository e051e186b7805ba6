use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the document content and filename so the loader can create
/// located errors without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a syntax error from a JSON error, located by its line and column.
    pub fn syntax_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_span(&self.src, source.line(), source.column());
        Box::new(Error::Syntax {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an unknown reference error.
    pub fn unknown_reference_error(
        &self,
        name: impl Into<String>,
        referrer: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::UnknownReference {
            src: self.named_source(),
            span: find_value_span(&self.src, &name),
            name,
            referrer: referrer.into(),
        })
    }

    /// Create an error for an `allOf` entry that is not an object model.
    pub fn all_of_not_object_error(
        &self,
        name: impl Into<String>,
        model: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::AllOfNotObject {
            src: self.named_source(),
            span: find_value_span(&self.src, &name),
            name,
            model: model.into(),
        })
    }

    /// Create an invalid schema error.
    pub fn invalid_schema_error(
        &self,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Box<Error> {
        let location = location.into();
        let key = location.rsplit('.').next().unwrap_or_default().to_string();
        Box::new(Error::InvalidSchema {
            src: self.named_source(),
            span: find_key_span(&self.src, &key),
            location,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the 'schema' path in objcmd.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema document")]
    #[diagnostic(code(objcmd::schema::syntax))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown model '{name}' referenced from '{referrer}'")]
    #[diagnostic(
        code(objcmd::schema::unknown_reference),
        help("every $ref and allOf entry must name a model under 'models'")
    )]
    UnknownReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("not defined")]
        span: Option<SourceSpan>,
        name: String,
        referrer: String,
    },

    #[error("'{model}' composes '{name}', which is not an object")]
    #[diagnostic(code(objcmd::schema::all_of_not_object))]
    AllOfNotObject {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an object model")]
        span: Option<SourceSpan>,
        name: String,
        model: String,
    },

    #[error("invalid schema at '{location}': {message}")]
    #[diagnostic(code(objcmd::schema::invalid))]
    InvalidSchema {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        location: String,
        message: String,
    },
}

/// Convert a 1-based JSON line/column pair into a one-character span.
pub(crate) fn line_column_span(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    Some(SourceSpan::from((offset, 0)))
}

/// Find a quoted string used as a value (not as an object key).
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", value);
    let mut from = 0;
    while let Some(pos) = src[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        if !src[end..].trim_start().starts_with(':') {
            return Some(SourceSpan::from((start + 1, value.len())));
        }
        from = end;
    }
    None
}

/// Find a quoted string used as an object key.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", key);
    let mut from = 0;
    while let Some(pos) = src[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        if src[end..].trim_start().starts_with(':') {
            return Some(SourceSpan::from((start + 1, key.len())));
        }
        from = end;
    }
    None
}
