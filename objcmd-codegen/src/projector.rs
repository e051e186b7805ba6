//! Parameter projector: schema tree → flat, ordered parameter list.
//!
//! For one schema the projector emits, in order:
//!
//! 1. the parameters of every `allOf` component, in declaration order;
//! 2. one parameter per writable property, except that object properties
//!    are flattened in place when they are named `properties`, or when they
//!    are closed and have no more own properties than the inlining threshold.
//!
//! Properties flattened through the threshold rule have their leaves
//! qualified with the declaring schema's name, so sibling objects sharing a
//! field name (`BodyColor.Hex`, `HoodColor.Hex`) stay distinguishable.

use objcmd_core::{pascal_join, strip_line_breaks, to_pascal_case};
use objcmd_ir::{
    AccessorPath, ParameterDescriptor, ProjectedCommand, PropertyNode, SchemaGraph, SchemaId,
    SchemaNode,
};
use thiserror::Error;

use crate::{ProjectionConfig, ProjectionWarning, Scope, adapt, command_target, declared_type};

/// Help text used when a property has no description.
pub const HELP_MESSAGE_MISSING: &str = "HELP MESSAGE MISSING";

/// Property name that is always flattened into its parent.
const RESERVED_PROPERTIES: &str = "properties";

/// Fatal projection failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// A schema contains itself through inlining or composition.
    #[error("cyclic schema: {}", cycle.join(" -> "))]
    CyclicSchema {
        /// Schema names from the first repeated schema back to itself.
        cycle: Vec<String>,
    },
}

/// Where a property's value ends up.
enum Placement {
    /// One parameter for the whole property.
    Leaf,
    /// Flattened, keeping the caller's name expansion.
    Inline,
    /// Flattened, with leaf names qualified by the declaring schema.
    InlineQualified,
}

/// Walks schemas of one graph with one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'g> {
    graph: &'g SchemaGraph,
    config: &'g ProjectionConfig,
}

impl<'g> Projector<'g> {
    pub fn new(graph: &'g SchemaGraph, config: &'g ProjectionConfig) -> Self {
        Self { graph, config }
    }

    /// Project a model into a complete command with a fresh scope.
    ///
    /// Returns the command and the warnings recorded while projecting it.
    pub fn project_command(
        &self,
        model: SchemaId,
    ) -> Result<(ProjectedCommand, Vec<ProjectionWarning>), ProjectionError> {
        let target = command_target(&self.graph[model], &self.config.name_prefix);
        let mut scope = Scope::new(target.name.clone());
        let parameters = self.project(model, &mut scope, &AccessorPath::root(), false)?;

        tracing::debug!(
            command = %target.name,
            parameters = parameters.len(),
            "projected command"
        );
        Ok((ProjectedCommand { target, parameters }, scope.into_warnings()))
    }

    /// Project `schema` into parameters bound below `path`.
    ///
    /// Names are allocated from `scope`; when `expand_names` is set, leaf
    /// names are qualified with the declaring schema's name.
    pub fn project(
        &self,
        schema: SchemaId,
        scope: &mut Scope,
        path: &AccessorPath,
        expand_names: bool,
    ) -> Result<Vec<ParameterDescriptor>, ProjectionError> {
        let mut ancestors = Vec::new();
        self.walk(schema, scope, path, expand_names, &mut ancestors)
    }

    fn walk(
        &self,
        id: SchemaId,
        scope: &mut Scope,
        path: &AccessorPath,
        expand_names: bool,
        ancestors: &mut Vec<SchemaId>,
    ) -> Result<Vec<ParameterDescriptor>, ProjectionError> {
        if let Some(pos) = ancestors.iter().position(|a| *a == id) {
            let mut cycle: Vec<String> = ancestors[pos..]
                .iter()
                .map(|a| self.graph[*a].name.clone())
                .collect();
            cycle.push(self.graph[id].name.clone());
            return Err(ProjectionError::CyclicSchema { cycle });
        }

        ancestors.push(id);
        let result = self.walk_schema(id, scope, path, expand_names, ancestors);
        ancestors.pop();
        result
    }

    fn walk_schema(
        &self,
        id: SchemaId,
        scope: &mut Scope,
        path: &AccessorPath,
        expand_names: bool,
        ancestors: &mut Vec<SchemaId>,
    ) -> Result<Vec<ParameterDescriptor>, ProjectionError> {
        let schema = &self.graph[id];
        let mut parameters = Vec::new();

        // Components contribute first; their own leaves are never qualified.
        for component in &schema.all_of {
            parameters.extend(self.walk(*component, scope, path, false, ancestors)?);
        }

        if schema.is_polymorphic {
            tracing::warn!(
                command = scope.command(),
                schema = %schema.name,
                "polymorphic schema; projecting its base shape only"
            );
            scope.warn(ProjectionWarning::Polymorphic {
                schema: schema.name.clone(),
            });
        }

        for property in schema.properties.values() {
            if property.read_only {
                tracing::trace!(
                    schema = %schema.name,
                    property = %property.name,
                    "skipping read-only property"
                );
                continue;
            }

            let expand = match self.placement(property) {
                Placement::Leaf => {
                    parameters.push(self.leaf(schema, property, scope, path, expand_names));
                    continue;
                }
                Placement::Inline => expand_names,
                Placement::InlineQualified => true,
            };

            let child = &self.graph[property.schema];
            tracing::debug!(
                schema = %schema.name,
                property = %property.name,
                expand_names = expand,
                "inlining object property"
            );
            let child_path = path.child(to_pascal_case(&property.name), child.full_name());
            parameters.extend(self.walk(property.schema, scope, &child_path, expand, ancestors)?);
        }

        Ok(parameters)
    }

    /// Decide whether a property becomes a parameter or is flattened.
    fn placement(&self, property: &PropertyNode) -> Placement {
        let child = &self.graph[property.schema];
        if !child.kind.is_object() {
            return Placement::Leaf;
        }
        if property.name == RESERVED_PROPERTIES {
            return Placement::Inline;
        }
        if !child.additional_properties
            && child.properties.len() <= self.config.max_inlined_parameters
        {
            return Placement::InlineQualified;
        }
        Placement::Leaf
    }

    fn leaf(
        &self,
        schema: &SchemaNode,
        property: &PropertyNode,
        scope: &mut Scope,
        path: &AccessorPath,
        expand_names: bool,
    ) -> ParameterDescriptor {
        let base = if expand_names {
            pascal_join(&[schema.name.as_str(), property.name.as_str()])
        } else {
            to_pascal_case(&property.name)
        };
        let name = scope.allocate(&base);
        let (representation, binding) = adapt(&self.graph[property.schema]);
        let help_text = strip_line_breaks(
            property
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(HELP_MESSAGE_MISSING),
        );

        tracing::trace!(
            command = scope.command(),
            parameter = %name,
            representation = %representation,
            depth = path.len(),
            "projected parameter"
        );

        ParameterDescriptor {
            name,
            representation,
            declared_type: declared_type(self.graph, property.schema),
            mandatory: property.required,
            help_text,
            accessor_path: path.clone(),
            member: to_pascal_case(&property.name),
            binding,
        }
    }
}
