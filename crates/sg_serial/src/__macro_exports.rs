//! Items used by code generated in other crates.
//!
//! Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    /// A rename submitted by [`submit_rename!`](crate::submit_rename).
    pub struct __RenameEntry {
        pub old: &'static str,
        pub new: &'static str,
    }

    impl __RenameEntry {
        #[inline]
        pub const fn new(old: &'static str, new: &'static str) -> Self {
            Self { old, new }
        }
    }

    inventory::collect!(__RenameEntry);

    #[inline]
    pub fn iter() -> impl Iterator<Item = &'static __RenameEntry> {
        inventory::iter::<__RenameEntry>.into_iter()
    }
}

/// Submits a type rename to [`ClassNameRegistry::global`].
///
/// Place it next to the renamed type; no central init function is needed.
/// Without the `auto_register` feature, register the pair by hand instead.
///
/// ```
/// sg_serial::submit_rename!("forest::OldTree" => "forest::Tree");
///
/// fn main() {
///     assert_eq!(
///         sg_serial::ClassNameRegistry::global().resolve("forest::OldTree"),
///         "forest::Tree",
///     );
/// }
/// ```
///
/// [`ClassNameRegistry::global`]: crate::ClassNameRegistry::global
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! submit_rename {
    ($old:expr => $new:expr $(,)?) => {
        $crate::__macro_exports::auto_register::inventory::submit! {
            $crate::__macro_exports::auto_register::__RenameEntry::new($old, $new)
        }
    };
}

/// Submits a type rename to `ClassNameRegistry::global`.
///
/// Does nothing without the `auto_register` feature.
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! submit_rename {
    ($old:expr => $new:expr $(,)?) => {};
}
