use core::any::Any;

/// A capability a registered type supports, stored in its
/// [`TypeMeta`](crate::registry::TypeMeta).
pub trait TypeTrait: Any + Send + Sync {}

impl dyn TypeTrait {
    /// Downcasts to the concrete type trait `T`.
    #[inline]
    pub fn downcast_ref<T: TypeTrait>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts to the concrete type trait `T` mutably.
    #[inline]
    pub fn downcast_mut<T: TypeTrait>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}
