//! Per-command name allocation and projection state.

use std::collections::HashSet;

/// Hands out parameter names that are unique within one command.
///
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct NameAllocator {
    reserved: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or `base` followed by the smallest free suffix 1, 2, ...
    pub fn allocate(&mut self, base: &str) -> String {
        if self.reserved.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.reserved.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }
}

/// Non-fatal findings recorded while projecting one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionWarning {
    /// The schema varies by discriminator; only its base shape was projected.
    Polymorphic { schema: String },
}

impl std::fmt::Display for ProjectionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionWarning::Polymorphic { schema } => write!(
                f,
                "schema '{}' is polymorphic; only its base shape is projected",
                schema
            ),
        }
    }
}

/// State of one command being projected.
#[derive(Debug, Clone)]
pub struct Scope {
    command: String,
    names: NameAllocator,
    warnings: Vec<ProjectionWarning>,
}

impl Scope {
    /// Create an empty scope for the named command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            names: NameAllocator::new(),
            warnings: Vec::new(),
        }
    }

    /// Name of the command this scope belongs to.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Allocate a parameter name in this scope.
    pub fn allocate(&mut self, base: &str) -> String {
        self.names.allocate(base)
    }

    /// Record a warning once; repeats are dropped.
    pub fn warn(&mut self, warning: ProjectionWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    pub fn warnings(&self) -> &[ProjectionWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ProjectionWarning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_first_use_is_unchanged() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("Name"), "Name");
        assert!(names.is_reserved("Name"));
    }

    #[test]
    fn test_collisions_get_smallest_suffix() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("Name"), "Name");
        assert_eq!(names.allocate("Name"), "Name1");
        assert_eq!(names.allocate("Name"), "Name2");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_suffix_skips_taken_names() {
        let mut names = NameAllocator::new();
        names.allocate("Name1");
        names.allocate("Name");
        assert_eq!(names.allocate("Name"), "Name2");
    }

    #[test]
    fn test_case_sensitive() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("Name"), "Name");
        assert_eq!(names.allocate("name"), "name");
    }

    #[test]
    fn test_scopes_are_independent() {
        let mut car = Scope::new("NewCarObject");
        let mut color = Scope::new("NewColorObject");
        assert_eq!(car.allocate("Hex"), "Hex");
        assert_eq!(color.allocate("Hex"), "Hex");
        assert_eq!(car.allocate("Hex"), "Hex1");
    }

    #[test]
    fn test_scope_warnings_deduplicate() {
        let mut scope = Scope::new("NewCarObject");
        scope.warn(ProjectionWarning::Polymorphic {
            schema: "Vehicle".into(),
        });
        scope.warn(ProjectionWarning::Polymorphic {
            schema: "Vehicle".into(),
        });
        assert_eq!(scope.warnings().len(), 1);
        assert_eq!(
            scope.warnings()[0].to_string(),
            "schema 'Vehicle' is polymorphic; only its base shape is projected"
        );
    }

    proptest! {
        #[test]
        fn test_allocated_names_are_unique(
            bases in prop::collection::vec("[A-C][a-c]{0,2}[0-2]?", 0..40)
        ) {
            let mut names = NameAllocator::new();
            let allocated: Vec<String> = bases.iter().map(|b| names.allocate(b)).collect();
            let unique: HashSet<&String> = allocated.iter().collect();
            prop_assert_eq!(unique.len(), allocated.len());
            for (base, name) in bases.iter().zip(&allocated) {
                prop_assert!(name.starts_with(base.as_str()));
            }
        }
    }
}
