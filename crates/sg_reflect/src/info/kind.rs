use core::{error, fmt};

/// A pure enumeration of the shapes a reflected value can take.
///
/// The codec only cares about this coarse shape: it decides whether a value
/// is written verbatim ([`Scalar`](ReflectKind::Scalar)), is nullable
/// ([`Optional`](ReflectKind::Optional)), or must be decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Primitive numbers, `bool`, `char` and `String`.
    Scalar,
    /// `Option<T>`.
    Optional,
    /// A derived struct with named fields.
    Struct,
    /// An ordered sequence such as `Vec<T>`.
    List,
    /// A key-value container such as `BTreeMap<K, V>`.
    Map,
    /// `Box<dyn Reflect>`, a slot whose runtime type is only known from its content.
    Boxed,
    /// A type that opts out of decomposition.
    Opaque,
}

impl ReflectKind {
    /// Returns the lower-case name used in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Optional => "optional",
            Self::Struct => "struct",
            Self::List => "list",
            Self::Map => "map",
            Self::Boxed => "boxed",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for ReflectKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a value has a different [`ReflectKind`] than expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectKindError {
    pub type_path: &'static str,
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kind mismatch for `{}`: expected {}, received {}",
            self.type_path, self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}
