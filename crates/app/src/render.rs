//! Output rendering.

use std::fmt::Write as _;

use actionorm_application::ActionSnippets;
use actionorm_domain::ModelRef;
use actionorm_infrastructure::{SerializationError, to_json_stable};
use serde::Serialize;

/// Rendered snippets for one model.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Adapter the snippets were rendered with.
    pub adapter: &'a str,
    /// Model the snippets were rendered for.
    pub model: &'a ModelRef,
    /// Rendered actions.
    pub actions: &'a [ActionSnippets],
}

impl Report<'_> {
    /// Renders the report as plain text, one block per action.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {} ({})", self.model, self.adapter);
        for action in self.actions {
            let _ = writeln!(out, "\n{}", action.action);
            for snippet in &action.snippets {
                let _ = writeln!(out, "  {:<18} {}", snippet.operation.as_str(), snippet.code);
            }
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        to_json_stable(self)
    }
}
