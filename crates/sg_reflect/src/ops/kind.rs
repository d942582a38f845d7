use alloc::boxed::Box;

use crate::info::{ReflectKind, ReflectKindError, TypePath};
use crate::Reflect;
use crate::ops::{List, Map, Optional, Scalar, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the kind-specific views of a value.
///
/// Returned by [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Scalar(&'a dyn Scalar),
    Optional(&'a dyn Optional),
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    /// The value held by a `Box<dyn Reflect>`.
    Boxed(&'a dyn Reflect),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of the kind-specific views of a value.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Optional(&'a mut dyn Optional),
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    /// The box itself, so its content can be replaced with another type.
    Boxed(&'a mut Box<dyn Reflect>),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_fn {
    ($($kind:ident),*) => {
        #[inline]
        pub fn kind(&self) -> ReflectKind {
            match self {
                $(Self::$kind(_) => ReflectKind::$kind,)*
            }
        }
    };
}

macro_rules! impl_as_fn {
    ($name:ident, $kind:ident, $ty:ty) => {
        #[doc = concat!("Returns the [`", stringify!($kind), "`] view, or a [`ReflectKindError`].")]
        #[inline]
        pub fn $name(self) -> Result<$ty, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                other => Err(other.kind_error(ReflectKind::$kind)),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn!(Scalar, Optional, Struct, List, Map, Boxed, Opaque);

    impl_as_fn!(as_scalar, Scalar, &'a dyn Scalar);
    impl_as_fn!(as_optional, Optional, &'a dyn Optional);
    impl_as_fn!(as_struct, Struct, &'a dyn Struct);
    impl_as_fn!(as_list, List, &'a dyn List);
    impl_as_fn!(as_map, Map, &'a dyn Map);

    fn type_path(&self) -> &'static str {
        match self {
            Self::Scalar(v) => v.reflect_type_path(),
            Self::Optional(v) => v.reflect_type_path(),
            Self::Struct(v) => v.reflect_type_path(),
            Self::List(v) => v.reflect_type_path(),
            Self::Map(v) => v.reflect_type_path(),
            Self::Boxed(_) => <Box<dyn Reflect>>::type_path(),
            Self::Opaque(v) => v.reflect_type_path(),
        }
    }

    fn kind_error(&self, expected: ReflectKind) -> ReflectKindError {
        ReflectKindError {
            type_path: self.type_path(),
            expected,
            received: self.kind(),
        }
    }
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn!(Scalar, Optional, Struct, List, Map, Boxed, Opaque);

    impl_as_fn!(as_scalar, Scalar, &'a mut dyn Scalar);
    impl_as_fn!(as_optional, Optional, &'a mut dyn Optional);
    impl_as_fn!(as_struct, Struct, &'a mut dyn Struct);
    impl_as_fn!(as_list, List, &'a mut dyn List);
    impl_as_fn!(as_map, Map, &'a mut dyn Map);

    fn type_path(&self) -> &'static str {
        match self {
            Self::Scalar(v) => v.reflect_type_path(),
            Self::Optional(v) => v.reflect_type_path(),
            Self::Struct(v) => v.reflect_type_path(),
            Self::List(v) => v.reflect_type_path(),
            Self::Map(v) => v.reflect_type_path(),
            Self::Boxed(_) => <Box<dyn Reflect>>::type_path(),
            Self::Opaque(v) => v.reflect_type_path(),
        }
    }

    fn kind_error(&self, expected: ReflectKind) -> ReflectKindError {
        ReflectKindError {
            type_path: self.type_path(),
            expected,
            received: self.kind(),
        }
    }
}
