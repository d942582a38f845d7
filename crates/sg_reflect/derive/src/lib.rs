//! See the [`Reflect`] derive macro.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
/// - `GetTypeMeta`
///
/// Field order is declaration order; it is the order in which a marshalled
/// struct lists its fields.
///
/// Tuple structs and enums are only accepted as `opaque`.
///
/// ## Type attributes
///
/// ### Custom Type Path
///
/// The type path defaults to `module_path!()` plus the type name, which
/// changes when the definition moves. A fixed path keeps old data readable:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "survey::model::Plot")]
/// struct Plot { /* ... */ }
/// ```
///
/// The path must not contain generics; they are appended automatically.
///
/// ### Default
///
/// `default` registers a `TypeTraitDefault` in the type's `GetTypeMeta`, so
/// the type can be constructed from a registry. The type must implement
/// `Default`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Plot { /* ... */ }
/// ```
///
/// ### Opaque Types
///
/// `opaque` keeps the fields hidden. An opaque value can be reflected but
/// not decomposed.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(opaque)]
/// struct Handle(u64);
/// ```
///
/// ### Auto Registration
///
/// `auto_register` submits the type for `TypeRegistry::auto_register`.
/// It has no effect on generic types or when the `auto_register` feature
/// is disabled.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default, auto_register)]
/// struct Plot { /* ... */ }
/// ```
///
/// ## Field attributes
///
/// `skip` hides a field from reflection. The field keeps its value when a
/// struct is populated in place, and its type needs no reflection support.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Plot {
///     id: u32,
///     #[reflect(skip)]
///     cache: std::cell::Cell<u32>,
/// }
/// ```
///
/// ## Generics
///
/// Type parameters are supported and receive the bounds the generated
/// impls need. Lifetime and const parameters are not.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::match_reflect_impls(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
