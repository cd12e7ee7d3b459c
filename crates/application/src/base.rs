//! Base adapter that implements no capability.
//!
//! Every operation falls through to the default body of the emitter traits
//! and fails with `UnimplementedCapability`.

use actionorm_domain::ReceiverRef;

use crate::ports::{OrmAdapter, RecordEmitter};

/// Adapter id of [`UnimplementedAdapter`].
pub const UNIMPLEMENTED_ADAPTER_ID: &str = "unimplemented";

/// Adapter with no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedAdapter;

impl UnimplementedAdapter {
    /// Creates the base adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OrmAdapter for UnimplementedAdapter {
    fn id(&self) -> &'static str {
        UNIMPLEMENTED_ADAPTER_ID
    }

    fn create(&self, receiver: ReceiverRef) -> Box<dyn RecordEmitter> {
        Box::new(UnimplementedEmitter::new(receiver))
    }
}

/// Emitter with no overrides, bound to a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnimplementedEmitter {
    receiver: ReceiverRef,
}

impl UnimplementedEmitter {
    /// Creates a base emitter for `receiver`.
    #[must_use]
    pub const fn new(receiver: ReceiverRef) -> Self {
        Self { receiver }
    }
}

impl RecordEmitter for UnimplementedEmitter {
    fn adapter_id(&self) -> &'static str {
        UNIMPLEMENTED_ADAPTER_ID
    }

    fn name(&self) -> &ReceiverRef {
        &self.receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::EmitError;
    use actionorm_domain::{ModelRef, OrmOperation, ParamsRef};
    use pretty_assertions::assert_eq;

    fn unimplemented(operation: OrmOperation) -> EmitError {
        EmitError::unimplemented(UNIMPLEMENTED_ADAPTER_ID, operation)
    }

    #[test]
    fn test_class_level_operations_are_unimplemented() {
        let adapter = UnimplementedAdapter::new();
        let model = ModelRef::new("Model");

        assert_eq!(adapter.all(&model), Err(unimplemented(OrmOperation::All)));
        assert_eq!(adapter.find(&model, None), Err(unimplemented(OrmOperation::Find)));
        assert_eq!(adapter.build(&model, None), Err(unimplemented(OrmOperation::Build)));
    }

    #[test]
    fn test_instance_level_operations_are_unimplemented() {
        let emitter = UnimplementedAdapter::new().create(ReceiverRef::new("@foo"));

        assert_eq!(emitter.save(), Err(unimplemented(OrmOperation::Save)));
        assert_eq!(
            emitter.update_attributes(None),
            Err(unimplemented(OrmOperation::UpdateAttributes))
        );
        assert_eq!(emitter.errors(), Err(unimplemented(OrmOperation::Errors)));
        assert_eq!(emitter.destroy(), Err(unimplemented(OrmOperation::Destroy)));
    }

    #[test]
    fn test_optional_params_do_not_change_the_error() {
        let adapter = UnimplementedAdapter::new();
        let model = ModelRef::new("Model");
        let params = ParamsRef::new("params[:id]");

        assert_eq!(adapter.find(&model, Some(&params)), adapter.find(&model, None));
        assert_eq!(adapter.build(&model, Some(&params)), adapter.build(&model, None));

        let emitter = adapter.create(ReceiverRef::new("@foo"));
        assert_eq!(
            emitter.update_attributes(Some(&params)),
            emitter.update_attributes(None)
        );
    }

    #[test]
    fn test_receiver_is_stored_verbatim() {
        let emitter = UnimplementedAdapter::new().create(ReceiverRef::new(""));
        assert!(emitter.name().is_empty());
        assert_eq!(emitter.adapter_id(), UNIMPLEMENTED_ADAPTER_ID);
    }
}
