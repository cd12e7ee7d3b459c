//! Emit controller action use case.

use std::sync::Arc;

use actionorm_domain::{ControllerAction, ModelRef, OrmOperation, ParamsRef, ReceiverRef};
use serde::Serialize;

use crate::error::ApplicationResult;
use crate::ports::{EmitResult, OrmAdapter, RecordEmitter};

/// Input for rendering controller actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitControllerActionInput {
    /// The model the controller manages.
    pub model: ModelRef,
    /// The receiver instance-level snippets act upon.
    pub receiver: ReceiverRef,
    /// Params used to look up a record, e.g. `params[:id]`.
    pub id_params: Option<ParamsRef>,
    /// Params used to build or update a record, e.g. `params[:post]`.
    pub attribute_params: Option<ParamsRef>,
}

impl EmitControllerActionInput {
    /// Creates an input without params references.
    #[must_use]
    pub fn new(model: impl Into<ModelRef>, receiver: impl Into<ReceiverRef>) -> Self {
        Self {
            model: model.into(),
            receiver: receiver.into(),
            id_params: None,
            attribute_params: None,
        }
    }

    /// Sets the params used to look up a record.
    #[must_use]
    pub fn with_id_params(mut self, params: impl Into<ParamsRef>) -> Self {
        self.id_params = Some(params.into());
        self
    }

    /// Sets the params used to build or update a record.
    #[must_use]
    pub fn with_attribute_params(mut self, params: impl Into<ParamsRef>) -> Self {
        self.attribute_params = Some(params.into());
        self
    }
}

/// One rendered snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedSnippet {
    /// The operation that produced the snippet.
    pub operation: OrmOperation,
    /// The generated code.
    pub code: String,
}

/// Snippets rendered for one controller action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSnippets {
    /// The rendered action.
    pub action: ControllerAction,
    /// Snippets in the order the action body uses them.
    pub snippets: Vec<EmittedSnippet>,
}

impl ActionSnippets {
    /// Returns the snippet rendered for `operation`, if the action uses it.
    #[must_use]
    pub fn get(&self, operation: OrmOperation) -> Option<&str> {
        self.snippets
            .iter()
            .find(|s| s.operation == operation)
            .map(|s| s.code.as_str())
    }
}

/// Use case rendering the ORM snippets of scaffold controller actions.
pub struct EmitControllerAction {
    adapter: Arc<dyn OrmAdapter>,
}

impl EmitControllerAction {
    /// Creates the use case for the given adapter.
    #[must_use]
    pub fn new(adapter: Arc<dyn OrmAdapter>) -> Self {
        Self { adapter }
    }

    /// Returns the id of the adapter snippets are rendered with.
    #[must_use]
    pub fn adapter_id(&self) -> &'static str {
        self.adapter.id()
    }

    /// Renders the snippets of a single action.
    ///
    /// # Errors
    /// - Returns the first `UnimplementedCapability` raised by the adapter;
    ///   no partial output is returned.
    pub fn execute(
        &self,
        action: ControllerAction,
        input: &EmitControllerActionInput,
    ) -> ApplicationResult<ActionSnippets> {
        tracing::debug!(
            adapter = self.adapter.id(),
            action = action.as_str(),
            model = %input.model,
            "rendering controller action"
        );

        let emitter = self.adapter.create(input.receiver.clone());
        let snippets = action
            .operations()
            .iter()
            .map(|&operation| -> ApplicationResult<EmittedSnippet> {
                let code = self.render(emitter.as_ref(), action, operation, input)?;
                Ok(EmittedSnippet { operation, code })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        Ok(ActionSnippets { action, snippets })
    }

    /// Renders every action in declaration order.
    ///
    /// # Errors
    /// - Returns the first error raised by any action.
    pub fn execute_all(
        &self,
        input: &EmitControllerActionInput,
    ) -> ApplicationResult<Vec<ActionSnippets>> {
        ControllerAction::all()
            .iter()
            .map(|&action| self.execute(action, input))
            .collect()
    }

    fn render(
        &self,
        emitter: &dyn RecordEmitter,
        action: ControllerAction,
        operation: OrmOperation,
        input: &EmitControllerActionInput,
    ) -> EmitResult {
        let params = params_for(action, operation, input);
        match operation {
            OrmOperation::All => self.adapter.all(&input.model),
            OrmOperation::Find => self.adapter.find(&input.model, params),
            OrmOperation::Build => self.adapter.build(&input.model, params),
            OrmOperation::Save => emitter.save(),
            OrmOperation::UpdateAttributes => emitter.update_attributes(params),
            OrmOperation::Errors => emitter.errors(),
            OrmOperation::Destroy => emitter.destroy(),
        }
    }
}

/// Selects the params reference an operation receives within an action.
///
/// `new` builds an empty record; `create` builds from the submitted
/// attributes.
fn params_for(
    action: ControllerAction,
    operation: OrmOperation,
    input: &EmitControllerActionInput,
) -> Option<&ParamsRef> {
    if !operation.accepts_params() {
        return None;
    }
    match (action, operation) {
        (_, OrmOperation::Find) => input.id_params.as_ref(),
        (ControllerAction::New, OrmOperation::Build) => None,
        _ => input.attribute_params.as_ref(),
    }
}
