use alloc::string::String;

use crate::Reflect;
use crate::info::TypePath;
use crate::ops::{AssignError, Scalar, SimpleValue};
use crate::reflection::impl_reflect_cast_fn;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

// -----------------------------------------------------------------------------
// Common

macro_rules! impl_scalar_common {
    ($ty:ident) => {
        impl_scalar_common!($ty, stringify!($ty), stringify!($ty), None);
    };
    ($ty:ty, $path:expr, $name:expr, $module:expr) => {
        impl TypePath for $ty {
            #[inline(always)]
            fn type_path() -> &'static str {
                $path
            }

            #[inline(always)]
            fn type_name() -> &'static str {
                $name
            }

            #[inline(always)]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline(always)]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Scalar);
        }

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::of::<Self>();
                meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
                meta
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($ty:ident => $variant:ident $(as $wire:ty)?) => {
        impl_scalar_common!($ty);

        impl Scalar for $ty {
            #[inline]
            fn to_simple(&self) -> SimpleValue {
                SimpleValue::$variant(*self $(as $wire)?)
            }

            fn assign(&mut self, value: &SimpleValue) -> Result<(), AssignError> {
                let converted = match *value {
                    SimpleValue::I8(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::I16(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::I32(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::I64(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::I128(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::U8(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::U16(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::U32(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::U64(v) => <$ty>::try_from(v).ok(),
                    SimpleValue::U128(v) => <$ty>::try_from(v).ok(),
                    _ => None,
                };
                match converted {
                    Some(v) => {
                        *self = v;
                        Ok(())
                    }
                    None => Err(AssignError::new(<$ty as TypePath>::type_path(), value)),
                }
            }
        }
    };
}

impl_integer!(i8 => I8);
impl_integer!(i16 => I16);
impl_integer!(i32 => I32);
impl_integer!(i64 => I64);
impl_integer!(i128 => I128);
impl_integer!(isize => I64 as i64);
impl_integer!(u8 => U8);
impl_integer!(u16 => U16);
impl_integer!(u32 => U32);
impl_integer!(u64 => U64);
impl_integer!(u128 => U128);
impl_integer!(usize => U64 as u64);

// -----------------------------------------------------------------------------
// Floats

impl_scalar_common!(f32);

impl Scalar for f32 {
    #[inline]
    fn to_simple(&self) -> SimpleValue {
        SimpleValue::F32(*self)
    }

    fn assign(&mut self, value: &SimpleValue) -> Result<(), AssignError> {
        match *value {
            SimpleValue::F32(v) => *self = v,
            SimpleValue::F64(v) => *self = v as f32,
            _ => return Err(AssignError::new("f32", value)),
        }
        Ok(())
    }
}

impl_scalar_common!(f64);

impl Scalar for f64 {
    #[inline]
    fn to_simple(&self) -> SimpleValue {
        SimpleValue::F64(*self)
    }

    fn assign(&mut self, value: &SimpleValue) -> Result<(), AssignError> {
        match *value {
            SimpleValue::F32(v) => *self = f64::from(v),
            SimpleValue::F64(v) => *self = v,
            _ => return Err(AssignError::new("f64", value)),
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Others

impl_scalar_common!(bool);

impl Scalar for bool {
    #[inline]
    fn to_simple(&self) -> SimpleValue {
        SimpleValue::Bool(*self)
    }

    fn assign(&mut self, value: &SimpleValue) -> Result<(), AssignError> {
        match *value {
            SimpleValue::Bool(v) => *self = v,
            _ => return Err(AssignError::new("bool", value)),
        }
        Ok(())
    }
}

impl_scalar_common!(char);

impl Scalar for char {
    #[inline]
    fn to_simple(&self) -> SimpleValue {
        SimpleValue::Char(*self)
    }

    fn assign(&mut self, value: &SimpleValue) -> Result<(), AssignError> {
        match *value {
            SimpleValue::Char(v) => *self = v,
            _ => return Err(AssignError::new("char", value)),
        }
        Ok(())
    }
}

impl_scalar_common!(String, "alloc::string::String", "String", Some("alloc::string"));

impl Scalar for String {
    #[inline]
    fn to_simple(&self) -> SimpleValue {
        SimpleValue::String(self.clone())
    }

    fn assign(&mut self, value: &SimpleValue) -> Result<(), AssignError> {
        match value {
            SimpleValue::String(v) => self.clone_from(v),
            _ => return Err(AssignError::new(Self::type_path(), value)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};
    use crate::ops::{Scalar, SimpleValue};

    #[test]
    fn type_paths() {
        assert_eq!(<u8 as TypePath>::type_path(), "u8");
        assert_eq!(<isize as TypePath>::type_name(), "isize");
        assert_eq!(<String as TypePath>::type_ident(), "String");
        assert_eq!(<f32 as TypePath>::module_path(), None);
    }

    #[test]
    fn pointer_sized_travel_as_64_bit() {
        assert_eq!((-3_isize).to_simple(), SimpleValue::I64(-3));
        assert_eq!(9_usize.to_simple(), SimpleValue::U64(9));

        let mut x = 0_usize;
        x.assign(&SimpleValue::U64(9)).unwrap();
        assert_eq!(x, 9);
    }

    #[test]
    fn lossy_assign_is_rejected() {
        let mut x = 7_i8;
        let err = x.assign(&SimpleValue::I32(300)).unwrap_err();
        assert_eq!(err.expected, "i8");
        assert_eq!(x, 7);

        let mut y = 0_u32;
        assert!(y.assign(&SimpleValue::F32(1.0)).is_err());
        assert!(y.assign(&SimpleValue::Null).is_err());
    }

    #[test]
    fn float_widths() {
        let mut x = 0_f64;
        x.assign(&SimpleValue::F32(0.5)).unwrap();
        assert_eq!(x, 0.5);

        let mut y = 0_f32;
        y.assign(&SimpleValue::F64(0.25)).unwrap();
        assert_eq!(y, 0.25);
    }

    #[test]
    fn string_and_kind() {
        let mut s = String::from("old");
        s.assign(&SimpleValue::String("new".into())).unwrap();
        assert_eq!(s, "new");
        assert!(s.assign(&SimpleValue::Char('c')).is_err());
        assert_eq!(s.reflect_kind(), ReflectKind::Scalar);
    }
}
