//! DataMapper adapter

use actionorm_application::{EmitResult, OrmAdapter, RecordEmitter};
use actionorm_domain::{ModelRef, ParamsRef, ReceiverRef};

use super::invoke;

const ID: &str = "data_mapper";

/// Emits DataMapper calls.
///
/// Differs from ActiveRecord in two places: records are fetched with
/// `Foo.get(...)` and updated with `@foo.update(...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataMapperAdapter;

impl DataMapperAdapter {
    /// Creates the DataMapper adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OrmAdapter for DataMapperAdapter {
    fn id(&self) -> &'static str {
        ID
    }

    fn create(&self, receiver: ReceiverRef) -> Box<dyn RecordEmitter> {
        Box::new(DataMapperEmitter { receiver })
    }

    fn all(&self, model: &ModelRef) -> EmitResult {
        Ok(invoke(model.as_str(), "all", None))
    }

    fn find(&self, model: &ModelRef, params: Option<&ParamsRef>) -> EmitResult {
        Ok(invoke(model.as_str(), "get", params))
    }

    fn build(&self, model: &ModelRef, params: Option<&ParamsRef>) -> EmitResult {
        Ok(invoke(model.as_str(), "new", params))
    }
}

#[derive(Debug, Clone)]
struct DataMapperEmitter {
    receiver: ReceiverRef,
}

impl RecordEmitter for DataMapperEmitter {
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
        Ok(invoke(self.receiver.as_str(), "update", params))
    }

    fn errors(&self) -> EmitResult {
        Ok(invoke(self.receiver.as_str(), "errors", None))
    }

    fn destroy(&self) -> EmitResult {
        Ok(invoke(self.receiver.as_str(), "destroy", None))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_uses_get() {
        let adapter = DataMapperAdapter::new();
        let foo = ModelRef::new("Foo");
        assert_eq!(
            adapter
                .find(&foo, Some(&ParamsRef::new("params[:id]")))
                .unwrap(),
            "Foo.get(params[:id])"
        );
        assert_eq!(adapter.find(&foo, None).unwrap(), "Foo.get");
    }

    #[test]
    fn test_update_attributes_uses_update() {
        let emitter = DataMapperAdapter::new().create(ReceiverRef::new("@foo"));
        assert_eq!(
            emitter
                .update_attributes(Some(&ParamsRef::new("params[:foo]")))
                .unwrap(),
            "@foo.update(params[:foo])"
        );
    }

    #[test]
    fn test_shared_snippets() {
        let adapter = DataMapperAdapter::new();
        let emitter = adapter.create(ReceiverRef::new("@foo"));

        assert_eq!(adapter.all(&ModelRef::new("Foo")).unwrap(), "Foo.all");
        assert_eq!(adapter.build(&ModelRef::new("Foo"), None).unwrap(), "Foo.new");
        assert_eq!(emitter.save().unwrap(), "@foo.save");
        assert_eq!(emitter.errors().unwrap(), "@foo.errors");
        assert_eq!(emitter.destroy().unwrap(), "@foo.destroy");
    }
}
