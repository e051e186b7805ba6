//! Summary figures over projected commands.

use objcmd_ir::{ProjectedCommand, RepresentationKind};
use serde::Serialize;

/// Pre-computed figures over a set of projected commands.
///
/// Reports and the `analyze` phase read these instead of walking the
/// parameter lists again.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionStats {
    /// Number of commands
    pub commands: usize,
    /// Total number of parameters across all commands
    pub parameters: usize,
    /// Parameters assigned as is
    pub plain: usize,
    /// Toggle parameters
    pub flags: usize,
    /// File path parameters
    pub file_paths: usize,
    /// Parameters marked mandatory
    pub mandatory: usize,
    /// Deepest accessor path below a backing instance
    pub max_depth: usize,
}

impl ProjectionStats {
    /// Compute all figures from projected commands.
    pub fn from_commands(commands: &[ProjectedCommand]) -> Self {
        let mut stats = Self {
            commands: commands.len(),
            ..Self::default()
        };

        for parameter in commands.iter().flat_map(|c| &c.parameters) {
            stats.parameters += 1;
            match parameter.representation {
                RepresentationKind::Plain => stats.plain += 1,
                RepresentationKind::Flag => stats.flags += 1,
                RepresentationKind::FilePath => stats.file_paths += 1,
            }
            if parameter.mandatory {
                stats.mandatory += 1;
            }
            stats.max_depth = stats.max_depth.max(parameter.accessor_path.len());
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use objcmd_core::ScalarType;
    use objcmd_ir::{PropertyNode, SchemaGraph, SchemaKind, SchemaNode};

    use super::*;
    use crate::{ProjectionConfig, Projector};

    #[test]
    fn test_stats_from_commands() {
        let mut graph = SchemaGraph::new();
        let s = graph.add(SchemaNode::new("string", SchemaKind::Scalar(ScalarType::String)));
        let b = graph.add(SchemaNode::new("boolean", SchemaKind::Boolean));
        let f = graph.add(SchemaNode::new("binary", SchemaKind::Binary));
        let props = graph.add_model(
            SchemaNode::object("CarProperties")
                .property(PropertyNode::new("enabled", b))
                .property(PropertyNode::new("manual", f)),
        );
        let car = graph.add_model(
            SchemaNode::object("Car")
                .property(PropertyNode::new("name", s).required())
                .property(PropertyNode::new("properties", props)),
        );

        let config = ProjectionConfig::default();
        let (command, _) = Projector::new(&graph, &config).project_command(car).unwrap();
        let stats = ProjectionStats::from_commands(&[command]);

        assert_eq!(
            stats,
            ProjectionStats {
                commands: 1,
                parameters: 3,
                plain: 1,
                flags: 1,
                file_paths: 1,
                mandatory: 1,
                max_depth: 1,
            }
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(ProjectionStats::from_commands(&[]), ProjectionStats::default());
    }
}
