//! Reference binder.
//!
//! Applies invocation values to a [`ProjectedCommand`](objcmd_ir::ProjectedCommand)
//! the way generated code does, producing the in-memory instance as JSON:
//! intermediate containers are created on first write, toggles become
//! booleans, and file paths must resolve to exactly one file.
//!
//! # Example
//!
//! ```ignore
//! let resolver = FsPathResolver::new(".");
//! let mut builder = InstanceBuilder::new(&command, &resolver);
//! builder.set("Name", Some("Roadster"))?;
//! builder.set("Enabled", None)?;
//! let car = builder.finish()?;
//! ```

mod error;
mod instance;
mod resolver;
mod value;

pub use error::BindError;
pub use instance::InstanceBuilder;
pub use resolver::{FsPathResolver, PathResolver};
pub use value::parse_value;
