//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{Changelog, PROJECT_MODULE};

/// Markdown changelog formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn module_heading(name: &str) -> String {
        if name == PROJECT_MODULE {
            "# Project".to_string()
        } else {
            format!("# Module: {}", capitalize(name))
        }
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelog), fields(entries = changelog.len()))]
    fn format(&self, changelog: &Changelog) -> String {
        let mut output = String::new();

        // An all-empty module still gets its heading
        for (name, changes) in changelog.ordered_modules() {
            output.push_str(&Self::module_heading(name));
            output.push_str("\n\n");

            for (category, entries) in changes.non_empty() {
                output.push_str(&format!("## {}\n", category));
                for entry in entries {
                    output.push_str(&format!("- {}\n", entry));
                }
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
