use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{ReflectKind, TypePath};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
///
/// Auto implemented for every type that implements [`TypePath`].
///
/// ```
/// use sg_reflect::{DynamicTypePath, Reflect};
///
/// let x = String::from("plot");
/// let y: &dyn Reflect = &x;
/// assert_eq!(y.reflect_type_path(), "alloc::string::String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection.
///
/// A `Reflect` value can report its stable type path, its coarse
/// [`ReflectKind`], and can be viewed through one of the kind traits in
/// [`ops`](crate::ops) via [`reflect_ref`] and [`reflect_mut`].
///
/// Use [the derive macro](crate::derive::Reflect) for your own structs.
///
/// # Boxed values
///
/// `Box<dyn Reflect>` is itself `Reflect` with kind [`ReflectKind::Boxed`],
/// which makes it usable as a field whose concrete type is only known at
/// runtime. Method calls on a `Box<dyn Reflect>` therefore resolve to the box
/// itself; dereference first to reach the value inside:
///
/// ```
/// use sg_reflect::{DynamicTypePath, Reflect};
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert_eq!(x.reflect_type_path(), "alloc::boxed::Box<dyn sg_reflect::Reflect>");
/// assert_eq!((*x).reflect_type_path(), "i32");
/// assert!(x.is::<i32>());
/// ```
///
/// # Manual implementation
///
/// ```ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = Self::from_boxed(value)?;
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Kind
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Kind(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Kind(self)
/// }
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + Any + Send + Sync {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed reflected value.
    ///
    /// ```
    /// use sg_reflect::Reflect;
    ///
    /// let r: Box<dyn Reflect> = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Extracts a `Self` from a boxed reflected value.
    ///
    /// The default implementation accepts only an exact `Self`.
    /// Wrapper types may accept more, e.g. `Option<T>` also accepts a bare `T`.
    ///
    /// ```
    /// use sg_reflect::Reflect;
    ///
    /// let x = <Option<u8>>::from_boxed(7_u8.into_boxed_reflect()).unwrap();
    /// assert_eq!(x, Some(7));
    ///
    /// assert!(<u16>::from_boxed(7_u8.into_boxed_reflect()).is_err());
    /// ```
    #[inline]
    fn from_boxed(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>>
    where
        Self: Sized,
    {
        value.take::<Self>()
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// `Any::type_id` on a `Box<dyn Reflect>` reports the box.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces `self` with `value`.
    ///
    /// Returns the value back if it cannot be stored in `self`.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the coarse shape of the value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable kind-specific view of the value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable kind-specific view of the value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// use sg_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// use sg_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = String::from("a").into_boxed_reflect();
    /// assert_eq!(x.take::<String>().unwrap(), "a");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Scalar(scalar) => write!(f, "{:?}", scalar.to_simple()),
            ReflectRef::Boxed(inner) => core::fmt::Debug::fmt(inner, f),
            ReflectRef::Optional(option) => match option.value() {
                Some(inner) => f.debug_tuple("Some").field(&inner).finish(),
                None => f.write_str("None"),
            },
            ReflectRef::Struct(value) => {
                let mut debug = f.debug_struct(self.reflect_type_name());
                for (name, field) in value.iter_fields() {
                    debug.field(name, &field);
                }
                debug.finish()
            }
            ReflectRef::List(list) => f.debug_list().entries(list.iter()).finish(),
            ReflectRef::Map(map) => f.debug_map().entries(map.iter()).finish(),
            ReflectRef::Opaque(_) => write!(f, "Reflect({})", self.reflect_type_path()),
        }
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn sg_reflect::Reflect"
    }

    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "dyn Reflect"
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the common methods `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = <Self as $crate::Reflect>::from_boxed(value)?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
