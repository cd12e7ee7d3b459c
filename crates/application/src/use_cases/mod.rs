//! Application use cases (snippet rendering orchestration).

mod emit_controller_action;

pub use emit_controller_action::*;
