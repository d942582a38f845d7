//! Field-level runtime reflection for the serial-graph codec.
//!
//! Rust has no runtime introspection, so every type that takes part in
//! marshalling carries a generated field-descriptor table instead:
//! [`#[derive(Reflect)]`](derive::Reflect) implements [`Reflect`] plus one of
//! the kind traits in [`ops`], and [`info::TypePath`] gives the type a stable
//! name that can be written to disk and looked up again in a
//! [`registry::TypeRegistry`].
//!
//! ```
//! use sg_reflect::{Reflect, derive::Reflect, ops::ReflectRef};
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Plot {
//!     id: u32,
//!     area: f64,
//! }
//!
//! let plot = Plot { id: 7, area: 0.04 };
//! let ReflectRef::Struct(fields) = plot.reflect_ref() else { unreachable!() };
//!
//! let names: Vec<&str> = fields.iter_fields().map(|(name, _)| name).collect();
//! assert_eq!(names, ["id", "area"]);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate through its package name, which must also
// resolve inside the crate itself (tests, docs).
extern crate self as sg_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{DynamicTypePath, Reflect};
pub use sg_reflect_derive as derive;
