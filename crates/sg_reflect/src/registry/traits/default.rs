use alloc::boxed::Box;

use crate::Reflect;
use crate::registry::{FromType, TypeTrait};

/// Constructs a zero value of a registered type.
///
/// A type without this trait in its [`TypeMeta`] cannot be rebuilt from a
/// serialized node. [`#[reflect(default)]`](crate::derive::Reflect) on a
/// derived struct adds it.
///
/// # Examples
///
/// ```
/// use sg_reflect::{Reflect, registry::{TypeRegistry, TypeTraitDefault}};
///
/// let registry = TypeRegistry::new(); // registers the scalar types
///
/// let ctor = registry
///     .get_with_type_path("alloc::string::String").unwrap()
///     .get_trait::<TypeTraitDefault>().unwrap();
///
/// let s: Box<dyn Reflect> = ctor.default();
/// assert_eq!(s.take::<String>().unwrap(), "");
/// ```
///
/// [`TypeMeta`]: crate::registry::TypeMeta
#[derive(Clone)]
pub struct TypeTraitDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl TypeTraitDefault {
    /// Calls the type's [`Default`] implementation.
    #[inline(always)]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Default + Reflect> FromType<T> for TypeTraitDefault {
    fn from_type() -> Self {
        Self {
            func: || Box::<T>::default(),
        }
    }
}

impl TypeTrait for TypeTraitDefault {}
