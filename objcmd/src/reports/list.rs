//! List command report data structures.

use super::output::{Output, Report};

/// Object models of the schema and the commands they get.
#[derive(Debug)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
}

#[derive(Debug)]
pub struct ListEntry {
    pub model: String,
    /// Command name, when the manifest selects the model.
    pub command: Option<String>,
    pub parameters: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.preformatted("No object models defined");
            return;
        }

        out.section("Models");
        for entry in &self.entries {
            match &entry.command {
                Some(command) => out.list_item(&format!(
                    "{} -> {} ({} parameter{})",
                    entry.model,
                    command,
                    entry.parameters,
                    if entry.parameters == 1 { "" } else { "s" }
                )),
                None => out.list_item(&format!("{} (not selected)", entry.model)),
            }
        }
    }
}
