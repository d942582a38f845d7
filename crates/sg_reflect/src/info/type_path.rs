// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to the stable name of a type.
///
/// The codec writes [`type_path`] into every serialized node and resolves it
/// again through the [`TypeRegistry`] when reading, so the value must be
/// unique and must not depend on compiler versions. [`core::any::type_name`]
/// gives no such guarantee.
///
/// These names never start with `::`.
///
/// # Implementation
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements it from the
/// module path of the definition, or from an explicit attribute:
///
/// ```
/// use sg_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect)]
/// struct Moved;
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "survey::model::Pinned")]
/// struct Pinned;
///
/// assert!(<Moved as TypePath>::type_path().ends_with("::Moved"));
/// assert_eq!(<Pinned as TypePath>::type_path(), "survey::model::Pinned");
/// assert_eq!(<Pinned as TypePath>::type_name(), "Pinned");
/// assert_eq!(<Pinned as TypePath>::module_path(), Some("survey::model"));
/// ```
///
/// Generic types should cache the composed names in a
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell):
///
/// ```
/// use sg_reflect::info::TypePath;
/// use sg_reflect::impls::{concat, GenericTypePathCell};
///
/// struct Tagged<T>(T);
///
/// impl<T: TypePath> TypePath for Tagged<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["survey::Tagged<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Tagged<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Tagged" }
///     fn module_path() -> Option<&'static str> { Some("survey") }
/// }
///
/// assert_eq!(<Tagged<u8>>::type_path(), "survey::Tagged<u8>");
/// assert_eq!(<Tagged<String>>::type_name(), "Tagged<String>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`TypeRegistry`]: crate::registry::TypeRegistry
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics of the type.
    ///
    /// For `Option<Vec<u8>>`, this is `"core::option::Option<alloc::vec::Vec<u8>>"`.
    fn type_path() -> &'static str;

    /// Returns a short path without module prefixes. May be duplicated.
    ///
    /// For `Option<Vec<u8>>`, this is `"Option<Vec<u8>>"`.
    fn type_name() -> &'static str;

    /// Returns the short name of the type, without generics.
    ///
    /// For `Option<Vec<u8>>`, this is `"Option"`.
    fn type_ident() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// Function-pointer table giving dynamic access to [`TypePath`].
///
/// ```
/// use sg_reflect::info::TypePathTable;
///
/// let table = TypePathTable::of::<String>();
/// assert_eq!(table.path(), "alloc::string::String");
/// assert_eq!(table.name(), "String");
/// assert_eq!(table.module_path(), Some("alloc::string"));
/// ```
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    /// Creates a new table from a type.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    /// See [`TypePath::type_path`]
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`]
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::type_ident`]
    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    /// See [`TypePath::module_path`]
    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl core::fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("module_path", &self.module_path())
            .finish()
    }
}
