//! Built-in lints.

mod empty_selection;
mod missing_description;
mod unknown_model;

pub use empty_selection::EmptySelectionLint;
pub use missing_description::MissingDescriptionLint;
pub use unknown_model::UnknownModelLint;
