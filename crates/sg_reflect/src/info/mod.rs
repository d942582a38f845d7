//! Static type information: stable type names and reflection kinds.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectKind, ReflectKindError};
pub use type_path::{TypePath, TypePathTable};
