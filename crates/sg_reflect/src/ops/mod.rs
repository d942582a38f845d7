//! Kind-specific access to reflected values.
//!
//! Each subtrait of [`Reflect`](crate::Reflect) exposes the operations the
//! codec needs for one [`ReflectKind`](crate::info::ReflectKind):
//!
//! - [`Scalar`]: leaf values convertible to and from a [`SimpleValue`].
//! - [`Optional`]: `Option<T>`, the nullable slot.
//! - [`Struct`]: named fields in declaration order.
//! - [`List`]: ordered sequences such as `Vec<T>`.
//! - [`Map`]: key-value containers such as `BTreeMap<K, V>`.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod optional_ops;
mod scalar_ops;
mod simple_value;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use optional_ops::Optional;
pub use scalar_ops::{AssignError, Scalar};
pub use simple_value::SimpleValue;
pub use struct_ops::{Struct, StructFieldIter};
