use core::{error, fmt};

use crate::Reflect;
use crate::ops::SimpleValue;

// -----------------------------------------------------------------------------
// Scalar

/// A leaf value: primitive numbers, `bool`, `char` and `String`.
///
/// # Examples
///
/// ```
/// use sg_reflect::ops::{Scalar, SimpleValue};
///
/// let mut x = 0_i64;
/// assert_eq!(x.to_simple(), SimpleValue::I64(0));
///
/// // Lossless integer conversions are accepted.
/// x.assign(&SimpleValue::U8(200)).unwrap();
/// assert_eq!(x, 200);
///
/// let mut y = 0_u8;
/// assert!(y.assign(&SimpleValue::I32(-1)).is_err());
/// assert!(y.assign(&SimpleValue::Bool(true)).is_err());
/// ```
pub trait Scalar: Reflect {
    /// Returns the value as a [`SimpleValue`].
    fn to_simple(&self) -> SimpleValue;

    /// Overwrites `self` with `value`.
    ///
    /// Integers are accepted when the conversion is lossless, floats accept
    /// either float width. Every other mismatch is an error and leaves
    /// `self` unchanged.
    fn assign(&mut self, value: &SimpleValue) -> Result<(), AssignError>;
}

// -----------------------------------------------------------------------------
// AssignError

/// A [`SimpleValue`] that cannot be stored in a scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignError {
    pub expected: &'static str,
    pub received: SimpleValue,
}

impl AssignError {
    /// Creates an error for target type `expected`.
    #[inline]
    pub fn new(expected: &'static str, received: &SimpleValue) -> Self {
        Self {
            expected,
            received: received.clone(),
        }
    }
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot assign a `{}` value ({:?}) to `{}`",
            self.received.describe(),
            self.received,
            self.expected
        )
    }
}

impl error::Error for AssignError {}
