use alloc::boxed::Box;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::Reflect;

/// A leaf value written verbatim, without further decomposition.
///
/// Each variant keeps the exact width of the Rust type it came from, so a
/// value read back is the same type it was written as. `isize` and `usize`
/// travel as [`I64`](SimpleValue::I64) and [`U64`](SimpleValue::U64).
///
/// [`Null`](SimpleValue::Null) stands for an absent `Option`.
///
/// # Examples
///
/// ```
/// use sg_reflect::ops::SimpleValue;
///
/// let v = SimpleValue::from(5_u16);
/// assert_eq!(v, SimpleValue::U16(5));
/// assert_eq!(v.type_path(), Some("u16"));
///
/// let boxed = v.to_reflect().unwrap();
/// assert_eq!(boxed.downcast_ref::<u16>(), Some(&5));
///
/// assert!(SimpleValue::Null.to_reflect().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleValue {
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    String(String),
}

macro_rules! simple_value_table {
    ($($variant:ident($ty:ty) => $path:literal),* $(,)?) => {
        impl SimpleValue {
            /// Returns the type path of the Rust type this value was produced from.
            ///
            /// Returns `None` for [`Null`](SimpleValue::Null).
            pub const fn type_path(&self) -> Option<&'static str> {
                match self {
                    Self::Null => None,
                    $(Self::$variant(_) => Some($path),)*
                }
            }

            /// Builds a boxed value of the exact type this value was produced from.
            ///
            /// Returns `None` for [`Null`](SimpleValue::Null).
            pub fn to_reflect(&self) -> Option<Box<dyn Reflect>> {
                match self {
                    Self::Null => None,
                    $(Self::$variant(v) => Some(Box::new(<$ty>::clone(v))),)*
                }
            }
        }

        $(
            impl From<$ty> for SimpleValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

simple_value_table! {
    Bool(bool) => "bool",
    Char(char) => "char",
    I8(i8) => "i8",
    I16(i16) => "i16",
    I32(i32) => "i32",
    I64(i64) => "i64",
    I128(i128) => "i128",
    U8(u8) => "u8",
    U16(u16) => "u16",
    U32(u32) => "u32",
    U64(u64) => "u64",
    U128(u128) => "u128",
    F32(f32) => "f32",
    F64(f64) => "f64",
    String(String) => "alloc::string::String",
}

impl SimpleValue {
    /// Returns `true` for [`Null`](SimpleValue::Null).
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short description of the value's type, for error messages.
    #[inline]
    pub const fn describe(&self) -> &'static str {
        match self.type_path() {
            Some(path) => path,
            None => "null",
        }
    }
}

impl From<&str> for SimpleValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl<T: Into<SimpleValue>> From<Option<T>> for SimpleValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SimpleValue;

    #[test]
    fn from_option() {
        assert_eq!(SimpleValue::from(None::<i32>), SimpleValue::Null);
        assert_eq!(SimpleValue::from(Some('x')), SimpleValue::Char('x'));
        assert_eq!(SimpleValue::from("ab"), SimpleValue::String("ab".into()));
    }

    #[test]
    fn describe() {
        assert_eq!(SimpleValue::Null.describe(), "null");
        assert_eq!(SimpleValue::F64(1.0).describe(), "f64");
        assert_eq!(
            SimpleValue::String("a".into()).describe(),
            "alloc::string::String"
        );
    }

    #[test]
    fn ron_text() {
        let text = ron::to_string(&SimpleValue::I32(-4)).unwrap();
        assert_eq!(text, "I32(-4)");
        let back: SimpleValue = ron::from_str(&text).unwrap();
        assert_eq!(back, SimpleValue::I32(-4));
    }
}
