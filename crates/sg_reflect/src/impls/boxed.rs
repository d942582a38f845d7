use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{ReflectKind, TypePath};
use crate::ops::{ReflectMut, ReflectRef};
use crate::registry::{GetTypeMeta, TypeMeta};

impl TypePath for Box<dyn Reflect> {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::boxed::Box<dyn sg_reflect::Reflect>"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Box<dyn Reflect>"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

/// A slot holding a value of any reflected type.
///
/// Setting it replaces the content, whatever its type.
impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn from_boxed(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        Ok(value)
    }

    #[inline]
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value;
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Boxed
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Boxed(&**self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Boxed(self)
    }
}

// Not constructible: there is no default content.
impl GetTypeMeta for Box<dyn Reflect> {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::ReflectRef;

    #[test]
    fn content_is_replaced() {
        let mut slot: Box<dyn Reflect> = 1_u8.into_boxed_reflect();
        slot.set(String::from("s").into_boxed_reflect()).unwrap();

        assert_eq!(slot.reflect_kind(), ReflectKind::Boxed);
        assert_eq!((*slot).reflect_kind(), ReflectKind::Scalar);
        assert_eq!(slot.downcast_ref::<String>().map(String::as_str), Some("s"));

        let ReflectRef::Boxed(inner) = slot.reflect_ref() else {
            panic!("expected a boxed value");
        };
        assert!(inner.is::<String>());
    }
}
