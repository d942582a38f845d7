use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A struct with named fields, visited in declaration order.
///
/// Fields marked `#[reflect(skip)]` are not visible through this trait.
///
/// # Examples
///
/// ```
/// use sg_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Sample {
///     depth: f32,
///     #[reflect(skip)]
///     cache: Vec<u8>,
///     label: String,
/// }
///
/// let mut s = Sample { depth: 1.5, cache: vec![], label: "a".into() };
///
/// assert_eq!(s.field_len(), 2);
/// assert_eq!(s.name_at(1), Some("label"));
/// assert_eq!(s.index_of("depth"), Some(0));
/// assert!(s.field("cache").is_none());
///
/// *s.field_mut("depth").unwrap().downcast_mut::<f32>().unwrap() = 2.0;
/// assert_eq!(s.depth, 2.0);
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the index of the field named `name`.
    fn index_of(&self, name: &str) -> Option<usize>;

    /// Returns the number of visible fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over `(name, value)` pairs.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the fields of a [`Struct`], in declaration order.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.struct_val.field_len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Reflect;
    use crate::info::{ReflectKind, TypePath};
    use crate::ops::Struct;
    use crate::registry::{TypeRegistry, TypeTraitDefault};
    use crate::{DynamicTypePath, Reflect};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Sample<T> {
        r#type: u8,
        values: Vec<T>,
    }

    #[derive(Reflect, Default)]
    #[reflect(type_path = "survey::Marker")]
    struct Marker;

    #[test]
    fn generic_type_path() {
        assert_eq!(
            <Sample<f32>>::type_path(),
            "sg_reflect::ops::struct_ops::tests::Sample<f32>"
        );
        assert_eq!(<Sample<String>>::type_name(), "Sample<String>");
        assert_eq!(<Sample<u8>>::type_ident(), "Sample");
        assert_eq!(
            <Sample<u8>>::module_path(),
            Some("sg_reflect::ops::struct_ops::tests")
        );
    }

    #[test]
    fn custom_type_path() {
        assert_eq!(Marker::type_path(), "survey::Marker");
        assert_eq!(Marker::type_name(), "Marker");
        assert_eq!(Marker::module_path(), Some("survey"));
        assert_eq!(Marker.field_len(), 0);
    }

    #[test]
    fn raw_identifiers_are_unraw() {
        let sample = Sample::<i8> { r#type: 3, values: vec![-1] };
        assert_eq!(sample.name_at(0), Some("type"));
        assert_eq!(sample.field("type").unwrap().downcast_ref::<u8>(), Some(&3));
    }

    #[test]
    fn set_replaces_whole_value() {
        let mut sample = Sample::<u16>::default();
        let other = Sample::<u16> { r#type: 1, values: vec![4, 5] };

        sample.set(Box::new(other)).unwrap();
        assert_eq!(sample.values, [4, 5]);

        let rejected = sample.set(Box::new(7_u16)).unwrap_err();
        assert!(rejected.is::<u16>());
        assert_eq!(sample.reflect_kind(), ReflectKind::Struct);
        assert_eq!(
            sample.as_reflect().reflect_type_path(),
            <Sample<u16>>::type_path()
        );
    }

    #[test]
    fn registers_field_types() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Sample<char>>();

        let meta = registry
            .get_with_type_path("sg_reflect::ops::struct_ops::tests::Sample<char>")
            .unwrap();
        let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
        assert_eq!(
            value.take::<Sample<char>>().unwrap(),
            Sample::<char>::default()
        );

        assert!(registry.get_with_type_path("alloc::vec::Vec<char>").is_some());
        assert!(registry.get_with_type_path("u8").is_some());
        assert!(registry.get_with_type_path("char").is_some());
    }
}
