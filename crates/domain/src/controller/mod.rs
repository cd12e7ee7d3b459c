//! Scaffold controller vocabulary.

mod action;
mod method;

pub use action::ControllerAction;
pub use method::HttpMethod;
