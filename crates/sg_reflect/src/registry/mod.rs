//! Type registry for looking up types by their stable path.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: A capability supported by a type, stored in its [`TypeMeta`].
//! - [`FromType`]: Creates a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: A type's path information plus its `TypeTrait` table.
//! - [`GetTypeMeta`]: Creates the `TypeMeta` of a type and registers its dependencies.
//! - [`TypeRegistry`]: The lookup table from type path to `TypeMeta`.
//! - TypeTraits:
//!     - [`TypeTraitDefault`]: Constructs a zero value of the type.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! Static registration is implemented with the [`inventory`] crate. On
//! platforms it does not support, `auto_register` returns `false` and
//! registers nothing.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::TypeTraitDefault;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;
