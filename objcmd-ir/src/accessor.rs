//! Member chains from a command's backing instance to a field.

use serde::{Deserialize, Serialize};

/// One member access on the way to a leaf field.
///
/// Every step is guarded: before dereferencing `member`, the binding code
/// ensures it holds an instance of `init_type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessStep {
    /// Member name on the enclosing container.
    pub member: String,
    /// Type constructed when the member is still empty.
    pub init_type: String,
}

/// Lazy-initialization directive emitted for one step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureInitialized {
    /// Rendered expression of the container (e.g., "_car.Properties").
    pub target: String,
    /// Type to construct if the container is empty.
    pub init_type: String,
}

/// Ordered member chain from the root backing instance to a leaf's container.
///
/// Paths are values: extending one returns a new path and leaves the original
/// untouched, so sibling branches of a recursion never see each other's steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessorPath {
    steps: Vec<AccessStep>,
}

impl AccessorPath {
    /// The empty path (the root backing instance itself).
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a copy of this path extended by one guarded step.
    pub fn child(&self, member: impl Into<String>, init_type: impl Into<String>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(AccessStep {
            member: member.into(),
            init_type: init_type.into(),
        });
        Self { steps }
    }

    pub fn steps(&self) -> &[AccessStep] {
        &self.steps
    }

    /// Number of steps, i.e. the nesting depth below the root.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render the container expression starting at `root`.
    pub fn render(&self, root: &str) -> String {
        let mut out = root.to_string();
        for step in &self.steps {
            out.push('.');
            out.push_str(&step.member);
        }
        out
    }

    /// Guards to run, outermost first, before assigning through this path.
    pub fn guards(&self, root: &str) -> Vec<EnsureInitialized> {
        let mut target = root.to_string();
        self.steps
            .iter()
            .map(|step| {
                target.push('.');
                target.push_str(&step.member);
                EnsureInitialized {
                    target: target.clone(),
                    init_type: step.init_type.clone(),
                }
            })
            .collect()
    }
}

impl std::fmt::Display for EnsureInitialized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ensure {} : {}", self.target, self.init_type)
    }
}
