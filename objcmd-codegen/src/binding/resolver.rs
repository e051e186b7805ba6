use std::path::PathBuf;

use wildmatch::WildMatchPattern;

use super::BindError;

/// Case-sensitive file name glob (`*` and `?`).
type FilePattern = WildMatchPattern<'*', '?'>;

/// Turns a bound path string into the files it designates.
pub trait PathResolver {
    /// All files matching `value`, sorted. An empty list means no match.
    fn resolve(&self, value: &str) -> Result<Vec<PathBuf>, BindError>;
}

/// Resolves paths on the local filesystem.
///
/// Relative paths are taken from the base directory. Wildcards are honoured
/// in the final path component only.
#[derive(Debug, Clone)]
pub struct FsPathResolver {
    base: PathBuf,
}

impl FsPathResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl PathResolver for FsPathResolver {
    fn resolve(&self, value: &str) -> Result<Vec<PathBuf>, BindError> {
        let full = self.base.join(value);
        let Some(file_name) = full.file_name().and_then(|n| n.to_str()) else {
            return Ok(Vec::new());
        };

        if !file_name.contains(['*', '?']) {
            return Ok(if full.is_file() { vec![full] } else { Vec::new() });
        }

        let Some(dir) = full.parent() else {
            return Ok(Vec::new());
        };
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BindError::io(dir, e)),
        };

        let pattern = FilePattern::new(file_name);
        let mut matches = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BindError::io(dir, e))?;
            let path = entry.path();
            if pattern.matches(&entry.file_name().to_string_lossy()) && path.is_file() {
                matches.push(path);
            }
        }
        matches.sort();

        tracing::trace!(value, matches = matches.len(), "resolved file pattern");
        Ok(matches)
    }
}
