//! The intermediate representation produced by the [`Marshaller`] and
//! consumed by the [`Unmarshaller`].
//!
//! A [`SerializedNode`] is one compound value: a declared type name plus an
//! ordered list of [`FieldEntry`]. The transport layer only ever sees this
//! tree, never live values.
//!
//! [`Marshaller`]: crate::Marshaller
//! [`Unmarshaller`]: crate::Unmarshaller

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};
use sg_reflect::ops::SimpleValue;

// -----------------------------------------------------------------------------
// Entry names

/// Name of the single entry of a [`NodeKind::Wrapper`] node.
pub const WRAPPED_ENTRY: &str = "value";

/// Name of the `index`th element of a [`NodeKind::Sequence`] node.
#[inline]
pub fn item_entry_name(index: usize) -> String {
    format!("[{index}]")
}

/// Name of the `index`th key of a [`NodeKind::Map`] node.
#[inline]
pub fn key_entry_name(index: usize) -> String {
    format!("key[{index}]")
}

/// Name of the `index`th value of a [`NodeKind::Map`] node.
#[inline]
pub fn value_entry_name(index: usize) -> String {
    format!("value[{index}]")
}

// -----------------------------------------------------------------------------
// NodeKind

/// The container shape recorded in a [`SerializedNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeKind {
    /// A struct; entries are named fields.
    #[default]
    Object,
    /// An ordered sequence; entries are `[0]`, `[1]`, ...
    Sequence,
    /// A key-value container; entries alternate `key[i]` and `value[i]`.
    Map,
    /// A singleton wrapper around one simple root value.
    Wrapper,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Sequence => "ordered-sequence",
            Self::Map => "map",
            Self::Wrapper => "wrapper",
        }
    }
}

impl fmt::Display for NodeKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// FieldValue

/// The value half of a [`FieldEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Stored verbatim; `SimpleValue::Null` is the null marker.
    Simple(SimpleValue),
    /// A nested compound value.
    Node(SerializedNode),
}

impl FieldValue {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Simple(SimpleValue::Null))
    }

    #[inline]
    pub const fn as_simple(&self) -> Option<&SimpleValue> {
        match self {
            Self::Simple(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    #[inline]
    pub const fn as_node(&self) -> Option<&SerializedNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Simple(_) => None,
        }
    }

    /// The type path a reader would rebuild this value as without further
    /// hints. `None` for null.
    pub fn type_path(&self) -> Option<&str> {
        match self {
            Self::Simple(value) => value.type_path(),
            Self::Node(node) => Some(&node.declared_type),
        }
    }
}

impl From<SimpleValue> for FieldValue {
    #[inline]
    fn from(value: SimpleValue) -> Self {
        Self::Simple(value)
    }
}

impl From<SerializedNode> for FieldValue {
    #[inline]
    fn from(value: SerializedNode) -> Self {
        Self::Node(value)
    }
}

// -----------------------------------------------------------------------------
// FieldEntry

/// A field name plus its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub value: FieldValue,
}

impl FieldEntry {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// SerializedNode

/// The encoding of one compound value.
///
/// `entries` keeps the order of the walk that produced it. Lists and maps
/// are rebuilt in that order.
///
/// # Examples
///
/// ```
/// use sg_serial::{FieldValue, NodeKind, SerializedNode};
/// use sg_reflect::ops::SimpleValue;
///
/// let mut node = SerializedNode::new("forest::Tree", NodeKind::Object);
/// node.push("species", SimpleValue::from("spruce"));
/// node.push("height", SimpleValue::F64(21.5));
///
/// assert_eq!(node.len(), 2);
/// assert_eq!(
///     node.get("height"),
///     Some(&FieldValue::Simple(SimpleValue::F64(21.5))),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedNode {
    pub declared_type: String,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub entries: Vec<FieldEntry>,
}

impl SerializedNode {
    /// Creates a node without entries.
    #[inline]
    pub fn new(declared_type: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            declared_type: declared_type.into(),
            kind,
            entries: Vec::new(),
        }
    }

    /// Creates a singleton wrapper hosting one value.
    ///
    /// `declared_type` is the type path of the hosted value, so the value can
    /// be rebuilt with its exact type (`Option<i32>`, `usize`, ...) where the
    /// entry alone would not say it.
    pub fn wrap(declared_type: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let mut node = Self::new(declared_type, NodeKind::Wrapper);
        node.push(WRAPPED_ENTRY, value);
        node
    }

    #[inline]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self.kind, NodeKind::Wrapper)
    }

    /// Returns the value hosted by a wrapper node.
    ///
    /// Returns `None` if the node is not a wrapper or does not hold exactly
    /// one entry named [`WRAPPED_ENTRY`].
    pub fn wrapped(&self) -> Option<&FieldValue> {
        match self.entries.as_slice() {
            [entry] if self.is_wrapper() && entry.name == WRAPPED_ENTRY => Some(&entry.value),
            _ => None,
        }
    }

    /// Appends an entry.
    #[inline]
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.push(FieldEntry::new(name, value));
    }

    /// Returns the value of the first entry called `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SerializedNode {
    type Item = &'a FieldEntry;
    type IntoIter = core::slice::Iter<'a, FieldEntry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_holds_one_value() {
        let node = SerializedNode::wrap("alloc::string::String", SimpleValue::from("hello"));
        assert!(node.is_wrapper());
        assert_eq!(
            node.wrapped(),
            Some(&FieldValue::Simple(SimpleValue::from("hello")))
        );

        let mut broken = node.clone();
        broken.push("extra", SimpleValue::Null);
        assert_eq!(broken.wrapped(), None);

        let mut object = SerializedNode::new("a::B", NodeKind::Object);
        object.push(WRAPPED_ENTRY, SimpleValue::Bool(true));
        assert_eq!(object.wrapped(), None);
    }

    #[test]
    fn wrapper_may_host_a_node() {
        let inner = SerializedNode::wrap("core::option::Option<u8>", SimpleValue::Null);
        let outer = SerializedNode::wrap("core::option::Option<core::option::Option<u8>>", inner.clone());

        assert_eq!(outer.wrapped(), Some(&FieldValue::Node(inner.clone())));
        assert_eq!(
            FieldValue::from(inner).type_path(),
            Some("core::option::Option<u8>")
        );
        assert_eq!(FieldValue::Simple(SimpleValue::U64(1)).type_path(), Some("u64"));
        assert_eq!(FieldValue::Simple(SimpleValue::Null).type_path(), None);
    }

    #[test]
    fn entry_names() {
        assert_eq!(item_entry_name(3), "[3]");
        assert_eq!(key_entry_name(0), "key[0]");
        assert_eq!(value_entry_name(12), "value[12]");
        assert_eq!(NodeKind::Sequence.to_string(), "ordered-sequence");
    }

    #[test]
    fn missing_kind_defaults_to_object() {
        let node: SerializedNode = ron::from_str("(declared_type: \"a::B\")").unwrap();
        assert_eq!(node.kind, NodeKind::Object);
        assert!(node.is_empty());
    }
}
