//! ORM references and operations.
//!
//! The references are opaque text: they are spliced into generated snippets
//! exactly as given and are never parsed, validated or escaped.

mod operation;
mod reference;

pub use operation::OrmOperation;
pub use reference::{ModelRef, ParamsRef, ReceiverRef};
