use serde::Deserialize;
use wildmatch::WildMatchPattern;

/// Case-sensitive glob over model names (`*` and `?`).
type ModelPattern = WildMatchPattern<'*', '?'>;

/// `[models]` table
///
/// Entries are model names or glob patterns such as `"Car*"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSelection {
    /// Models to generate; every object model when absent
    pub include: Option<Vec<String>>,

    /// Models to skip, applied after `include`
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ModelSelection {
    /// Returns true if a model with this name should get a command.
    pub fn selects(&self, model: &str) -> bool {
        let included = match &self.include {
            Some(patterns) => patterns.iter().any(|p| matches(p, model)),
            None => true,
        };
        included && !self.exclude.iter().any(|p| matches(p, model))
    }

    /// Include entries that match none of the given model names.
    pub fn unmatched_includes<'a>(&'a self, models: &[&str]) -> Vec<&'a str> {
        self.include
            .iter()
            .flatten()
            .filter(|p| !models.iter().any(|m| matches(p, m)))
            .map(String::as_str)
            .collect()
    }
}

fn matches(pattern: &str, model: &str) -> bool {
    ModelPattern::new(pattern).matches(model)
}
