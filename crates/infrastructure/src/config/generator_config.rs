//! Generator configuration values.

use actionorm_application::EmitControllerActionInput;
use actionorm_domain::{ModelRef, ParamsRef, ReceiverRef};
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// Adapter used when the configuration does not name one.
pub const DEFAULT_ORM: &str = "active_record";

/// Settings for rendering controller snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Id of the ORM adapter to render with.
    pub orm: String,
    /// Model to render for, e.g. `Post`.
    pub model: Option<String>,
    /// Receiver for instance-level snippets. Derived from the model if unset.
    pub receiver: Option<String>,
    /// Params used to look up a record. Defaults to `params[:id]`.
    pub id_params: Option<String>,
    /// Params used to build or update a record. Derived from the model if unset.
    pub attribute_params: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            orm: DEFAULT_ORM.to_string(),
            model: None,
            receiver: None,
            id_params: None,
            attribute_params: None,
        }
    }
}

impl GeneratorConfig {
    /// Returns the receiver for `model`: the configured one, or the model's
    /// singular name as an instance variable (`Admin::BlogPost` -> `@blog_post`).
    #[must_use]
    pub fn receiver_for(&self, model: &str) -> ReceiverRef {
        self.receiver.as_ref().map_or_else(
            || ReceiverRef::new(format!("@{}", singular_name(model))),
            |receiver| ReceiverRef::new(receiver.as_str()),
        )
    }

    /// Returns the params used to look up a record.
    #[must_use]
    pub fn id_params(&self) -> ParamsRef {
        ParamsRef::new(self.id_params.as_deref().unwrap_or("params[:id]"))
    }

    /// Returns the params used to build or update a record of `model`.
    #[must_use]
    pub fn attribute_params_for(&self, model: &str) -> ParamsRef {
        self.attribute_params.as_ref().map_or_else(
            || ParamsRef::new(format!("params[:{}]", singular_name(model))),
            |params| ParamsRef::new(params.as_str()),
        )
    }

    /// Builds the use case input for `model`, falling back to the configured
    /// model when none is given.
    #[must_use]
    pub fn to_input(&self, model: Option<&str>) -> Option<EmitControllerActionInput> {
        let model = model.or(self.model.as_deref())?;
        Some(EmitControllerActionInput {
            model: ModelRef::new(model),
            receiver: self.receiver_for(model),
            id_params: Some(self.id_params()),
            attribute_params: Some(self.attribute_params_for(model)),
        })
    }
}

/// Snake-cased last path segment of a model name.
fn singular_name(model: &str) -> String {
    model
        .rsplit("::")
        .next()
        .unwrap_or(model)
        .to_case(Case::Snake)
}
