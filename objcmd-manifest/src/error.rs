use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The objcmd.toml text an error points into.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// TOML syntax or shape error, labelled where toml reports it.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// A value that parsed but is not acceptable.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// A name that must be an identifier but is not, e.g. the noun prefix.
    pub fn invalid_identifier_error(
        &self,
        name: &str,
        context: String,
        reason: &str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.to_string(),
            context,
            reason: reason.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create an objcmd.toml with a [project] table, or pass --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse objcmd.toml")]
    #[diagnostic(code(objcmd::manifest::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(objcmd::manifest::invalid_value))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(
        code(objcmd::manifest::invalid_identifier),
        help("{reason}; command nouns start with an ASCII letter, then letters, digits or _")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
