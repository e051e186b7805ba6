use objcmd_core::{to_camel_case, to_pascal_case};
use objcmd_ir::{CommandTarget, SchemaNode};

/// Verb shared by every generated command.
const VERB: &str = "New";

/// Identity of the command that creates an instance of `model`.
pub fn command_target(model: &SchemaNode, name_prefix: &str) -> CommandTarget {
    let type_name = to_pascal_case(&model.name);
    let noun = format!("{}{}Object", name_prefix, type_name);

    CommandTarget {
        verb: VERB.to_string(),
        name: format!("{}{}", VERB, noun),
        noun,
        model: model.name.clone(),
        backing_field: format!("_{}", to_camel_case(&model.name)),
        output_type: model.full_name(),
        description: format!("Create an in-memory instance of the {} object.", type_name),
    }
}
