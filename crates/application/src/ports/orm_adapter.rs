//! ORM snippet emitter port.
//!
//! Every operation returns generated source text instead of touching a
//! database. The class-level operations live on [`OrmAdapter`]; the
//! instance-level operations live on the [`RecordEmitter`] an adapter
//! creates for a receiver.
//!
//! Every operation has a default body that fails with
//! [`EmitError::UnimplementedCapability`]. Adapters override the operations
//! their ORM supports. An operation left at its default fails when it is
//! invoked, not when the adapter is registered.

use actionorm_domain::{ModelRef, OrmOperation, ParamsRef, ReceiverRef};
use serde::{Deserialize, Serialize};

/// Error raised by snippet emitters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum EmitError {
    /// The adapter does not implement the requested operation.
    #[error("ORM adapter '{adapter}' does not implement `{operation}`")]
    UnimplementedCapability {
        /// Id of the adapter that was asked.
        adapter: String,
        /// The operation that was invoked.
        operation: OrmOperation,
    },
}

impl EmitError {
    /// Creates an unimplemented-capability error.
    #[must_use]
    pub fn unimplemented(adapter: impl Into<String>, operation: OrmOperation) -> Self {
        Self::UnimplementedCapability {
            adapter: adapter.into(),
            operation,
        }
    }

    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> OrmOperation {
        match self {
            Self::UnimplementedCapability { operation, .. } => *operation,
        }
    }
}

/// Result of rendering one snippet.
pub type EmitResult = Result<String, EmitError>;

/// Class-level side of an ORM adapter.
///
/// Implementations are stateless: the model and params references are
/// forwarded into the returned text and never retained.
pub trait OrmAdapter: Send + Sync {
    /// Returns the id the adapter is registered under, e.g. `active_record`.
    fn id(&self) -> &'static str;

    /// Creates an emitter bound to `receiver`.
    ///
    /// The receiver is stored verbatim and never validated.
    fn create(&self, receiver: ReceiverRef) -> Box<dyn RecordEmitter>;

    /// Renders a fetch of the full collection of `model`.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnimplementedCapability`] unless overridden.
    fn all(&self, _model: &ModelRef) -> EmitResult {
        Err(EmitError::unimplemented(self.id(), OrmOperation::All))
    }

    /// Renders a lookup of a single record of `model`, optionally keyed by
    /// `params`.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnimplementedCapability`] unless overridden.
    fn find(&self, _model: &ModelRef, _params: Option<&ParamsRef>) -> EmitResult {
        Err(EmitError::unimplemented(self.id(), OrmOperation::Find))
    }

    /// Renders construction of a new, unsaved record of `model`, optionally
    /// initialised from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnimplementedCapability`] unless overridden.
    fn build(&self, _model: &ModelRef, _params: Option<&ParamsRef>) -> EmitResult {
        Err(EmitError::unimplemented(self.id(), OrmOperation::Build))
    }
}

/// Instance-level side of an ORM adapter, bound to one receiver.
pub trait RecordEmitter: Send + Sync {
    /// Returns the id of the adapter that created this emitter.
    fn adapter_id(&self) -> &'static str;

    /// Returns the receiver the snippets act upon.
    fn name(&self) -> &ReceiverRef;

    /// Renders persisting the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnimplementedCapability`] unless overridden.
    fn save(&self) -> EmitResult {
        Err(EmitError::unimplemented(self.adapter_id(), OrmOperation::Save))
    }

    /// Renders updating the receiver from `params` and persisting it.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnimplementedCapability`] unless overridden.
    fn update_attributes(&self, _params: Option<&ParamsRef>) -> EmitResult {
        Err(EmitError::unimplemented(
            self.adapter_id(),
            OrmOperation::UpdateAttributes,
        ))
    }

    /// Renders access to the receiver's validation errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnimplementedCapability`] unless overridden.
    fn errors(&self) -> EmitResult {
        Err(EmitError::unimplemented(self.adapter_id(), OrmOperation::Errors))
    }

    /// Renders deleting the receiver's record.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::UnimplementedCapability`] unless overridden.
    fn destroy(&self) -> EmitResult {
        Err(EmitError::unimplemented(self.adapter_id(), OrmOperation::Destroy))
    }
}
