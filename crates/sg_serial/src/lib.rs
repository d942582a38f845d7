//! A reflection-driven object-graph codec.
//!
//! Values whose types implement [`Reflect`](sg_reflect::Reflect) are
//! decomposed into a tree of [`SerializedNode`]s by the [`Marshaller`] and
//! rebuilt by the [`Unmarshaller`]:
//!
//! ```text
//! value -> Marshaller -> SerializedNode tree -> transport -> bytes
//! bytes -> transport -> SerializedNode tree -> Unmarshaller -> value
//! ```
//!
//! The [`ClassNameRegistry`] maps type paths written by older versions of a
//! program to their current names, so old files keep loading after types
//! are renamed or moved.
//!
//! # Examples
//!
//! ```
//! use sg_reflect::{derive::Reflect, registry::TypeRegistry};
//! use sg_serial::{ClassNameRegistry, Marshaller, Unmarshaller};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default, type_path = "forest::Tree")]
//! struct Tree {
//!     species: String,
//!     dbh: f32,
//! }
//!
//! let mut types = TypeRegistry::new();
//! types.register::<Tree>();
//!
//! // Files written before the type moved still say `stand::Tree`.
//! let mut names = ClassNameRegistry::new();
//! names.register("stand::Tree", "forest::Tree");
//!
//! let tree = Tree { species: "black spruce".into(), dbh: 17.5 };
//! let mut node = Marshaller.marshall(&tree).unwrap();
//! node.declared_type = "stand::Tree".into();
//!
//! let back: Tree = Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap();
//! assert_eq!(back, tree);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod class_names;
mod classifier;
mod error;
mod marshaller;
mod node;
mod unmarshaller;

pub mod transport;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use class_names::{ClassNameRegistry, ClassNameRegistryArc};
pub use classifier::{Classified, TypeClassifier};
pub use error::{MarshalError, TransportError, UnmarshalError};
pub use marshaller::Marshaller;
pub use node::{FieldEntry, FieldValue, NodeKind, SerializedNode};
pub use node::{WRAPPED_ENTRY, item_entry_name, key_entry_name, value_entry_name};
pub use unmarshaller::Unmarshaller;
