/// Creates a [`TypeTrait`](crate::registry::TypeTrait) for the type `T`.
///
/// ```
/// use sg_reflect::registry::{FromType, TypeTraitDefault};
///
/// let ctor = <TypeTraitDefault as FromType<u8>>::from_type();
/// assert_eq!(ctor.default().take::<u8>().unwrap(), 0);
/// ```
pub trait FromType<T> {
    fn from_type() -> Self;
}
