//! ActiveRecord adapter

use actionorm_application::{EmitResult, OrmAdapter, RecordEmitter};
use actionorm_domain::{ModelRef, ParamsRef, ReceiverRef};

use super::invoke;

const ID: &str = "active_record";

/// Emits ActiveRecord calls, e.g. `Foo.find(params[:id])` and `@foo.save`.
///
/// Record construction is exposed as `build` but renders `Foo.new`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveRecordAdapter;

impl ActiveRecordAdapter {
    /// Creates the ActiveRecord adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OrmAdapter for ActiveRecordAdapter {
    fn id(&self) -> &'static str {
        ID
    }

    fn create(&self, receiver: ReceiverRef) -> Box<dyn RecordEmitter> {
        Box::new(ActiveRecordEmitter { receiver })
    }

    fn all(&self, model: &ModelRef) -> EmitResult {
        Ok(invoke(model.as_str(), "all", None))
    }

    fn find(&self, model: &ModelRef, params: Option<&ParamsRef>) -> EmitResult {
        Ok(invoke(model.as_str(), "find", params))
    }

    fn build(&self, model: &ModelRef, params: Option<&ParamsRef>) -> EmitResult {
        Ok(invoke(model.as_str(), "new", params))
    }
}

#[derive(Debug, Clone)]
struct ActiveRecordEmitter {
    receiver: ReceiverRef,
}

impl RecordEmitter for ActiveRecordEmitter {
    fn adapter_id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &ReceiverRef {
        &self.receiver
    }

    fn save(&self) -> EmitResult {
        Ok(invoke(self.receiver.as_str(), "save", None))
    }

    fn update_attributes(&self, params: Option<&ParamsRef>) -> EmitResult {
        Ok(invoke(self.receiver.as_str(), "update_attributes", params))
    }

    fn errors(&self) -> EmitResult {
        Ok(invoke(self.receiver.as_str(), "errors", None))
    }

    fn destroy(&self) -> EmitResult {
        Ok(invoke(self.receiver.as_str(), "destroy", None))
    }
}
