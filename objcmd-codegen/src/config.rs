use objcmd_manifest::{DEFAULT_MAX_INLINED_PARAMETERS, ProjectConfig};

/// Settings consumed by the projector and the target builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Objects with at most this many own properties are inlined.
    pub max_inlined_parameters: usize,
    /// Prefix placed in front of every command noun.
    pub name_prefix: String,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_inlined_parameters: DEFAULT_MAX_INLINED_PARAMETERS,
            name_prefix: String::new(),
        }
    }
}

impl From<&ProjectConfig> for ProjectionConfig {
    fn from(project: &ProjectConfig) -> Self {
        Self {
            max_inlined_parameters: project.max_inlined_parameters,
            name_prefix: project.noun_prefix.clone(),
        }
    }
}

impl ProjectionConfig {
    pub fn with_max_inlined_parameters(mut self, max: usize) -> Self {
        self.max_inlined_parameters = max;
        self
    }
}
