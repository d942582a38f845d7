use sg_reflect::Reflect;
use sg_reflect::ops::{ReflectRef, SimpleValue};

// -----------------------------------------------------------------------------
// Classified

/// The outcome of [`TypeClassifier::classify`].
#[derive(Debug)]
pub enum Classified<'a> {
    /// Stored verbatim in a [`FieldEntry`](crate::FieldEntry).
    Simple(SimpleValue),
    /// Must be decomposed into a [`SerializedNode`](crate::SerializedNode).
    ///
    /// The reference points past any `Box<dyn Reflect>` or `Some` layers. It
    /// may be an `Option` itself when that option sits inside a `Some`.
    Compound(&'a dyn Reflect),
}

impl Classified<'_> {
    #[inline]
    pub const fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }
}

// -----------------------------------------------------------------------------
// TypeClassifier

/// Decides whether a value is simple or compound.
///
/// - scalars (numbers, `bool`, `char`, `String`) are simple;
/// - `None` is simple and becomes [`SimpleValue::Null`];
/// - `Some(x)` and `Box<dyn Reflect>` are classified by their content;
/// - `Some(x)` where `x` is itself an `Option` is compound, pointing at `x`,
///   so `Some(None)` is not confused with `None`;
/// - everything else (structs, lists, maps, opaque values) is compound.
///
/// # Examples
///
/// ```
/// use sg_reflect::{Reflect, ops::SimpleValue};
/// use sg_serial::{Classified, TypeClassifier};
///
/// let boxed: Box<dyn Reflect> = Some(4_u8).into_boxed_reflect();
/// assert!(matches!(
///     TypeClassifier::classify(&*boxed),
///     Classified::Simple(SimpleValue::U8(4)),
/// ));
///
/// let list = vec![1, 2];
/// assert!(!TypeClassifier::classify(&list).is_simple());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeClassifier;

impl TypeClassifier {
    pub fn classify(value: &dyn Reflect) -> Classified<'_> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => Classified::Simple(scalar.to_simple()),
            ReflectRef::Optional(option) => match option.value() {
                Some(inner) if matches!(inner.reflect_ref(), ReflectRef::Optional(_)) => {
                    Classified::Compound(inner)
                }
                Some(inner) => Self::classify(inner),
                None => Classified::Simple(SimpleValue::Null),
            },
            ReflectRef::Boxed(inner) => Self::classify(inner),
            ReflectRef::Struct(_)
            | ReflectRef::List(_)
            | ReflectRef::Map(_)
            | ReflectRef::Opaque(_) => Classified::Compound(value),
        }
    }

    #[inline]
    pub fn is_simple(value: &dyn Reflect) -> bool {
        Self::classify(value).is_simple()
    }

    /// Strips `Box<dyn Reflect>` layers, returning the value whose type is
    /// known only at runtime.
    pub fn runtime_value(value: &dyn Reflect) -> &dyn Reflect {
        match value.reflect_ref() {
            ReflectRef::Boxed(inner) => Self::runtime_value(inner),
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use sg_reflect::Reflect;
    use sg_reflect::derive::Reflect;
    use sg_reflect::ops::SimpleValue;

    use super::{Classified, TypeClassifier};

    #[derive(Reflect, Default)]
    struct Stem {
        dbh: f32,
    }

    #[derive(Reflect)]
    #[reflect(opaque)]
    struct Handle;

    fn simple(value: &dyn Reflect) -> Option<SimpleValue> {
        match TypeClassifier::classify(value) {
            Classified::Simple(simple) => Some(simple),
            Classified::Compound(_) => None,
        }
    }

    #[test]
    fn scalars_are_simple() {
        assert_eq!(simple(&3_i16), Some(SimpleValue::I16(3)));
        assert_eq!(simple(&'c'), Some(SimpleValue::Char('c')));
        assert_eq!(simple(&false), Some(SimpleValue::Bool(false)));
        assert_eq!(
            simple(&String::from("pine")),
            Some(SimpleValue::String("pine".into()))
        );
    }

    #[test]
    fn null_is_simple() {
        assert_eq!(simple(&None::<u32>), Some(SimpleValue::Null));
        assert_eq!(simple(&None::<Stem>), Some(SimpleValue::Null));
        assert_eq!(simple(&Some(2.5_f64)), Some(SimpleValue::F64(2.5)));
    }

    #[test]
    fn compound_values() {
        assert!(simple(&Stem::default()).is_none());
        assert!(simple(&vec![1_u8]).is_none());
        assert!(simple(&BTreeMap::<u8, u8>::new()).is_none());
        assert!(simple(&Handle).is_none());
    }

    #[test]
    fn nested_options_stop_at_the_inner_option() {
        assert_eq!(simple(&None::<Option<u8>>), Some(SimpleValue::Null));

        let outer: Option<Option<u8>> = Some(None);
        match TypeClassifier::classify(&outer) {
            Classified::Compound(inner) => assert!(inner.is::<Option<u8>>()),
            Classified::Simple(value) => panic!("`Some(None)` classified as {value:?}"),
        }
    }

    #[test]
    fn boxes_are_transparent() {
        let boxed: Box<dyn Reflect> = Box::new(Stem { dbh: 12.0 });
        match TypeClassifier::classify(&boxed) {
            Classified::Compound(inner) => assert!(inner.is::<Stem>()),
            Classified::Simple(_) => panic!("a struct is compound"),
        }

        let nested: Box<dyn Reflect> = Box::new(7_u64.into_boxed_reflect());
        assert_eq!(simple(&nested), Some(SimpleValue::U64(7)));
        assert!(TypeClassifier::runtime_value(&nested).is::<u64>());
    }
}
