use sg_reflect::Reflect;
use sg_reflect::ops::{List, Map, ReflectRef, Struct};

use crate::classifier::{Classified, TypeClassifier};
use crate::error::MarshalError;
use crate::node::{FieldValue, NodeKind, SerializedNode};
use crate::node::{item_entry_name, key_entry_name, value_entry_name};

/// Turns a live value into a [`SerializedNode`] tree.
///
/// - A simple root value is hosted in a singleton wrapper node.
/// - A struct becomes an [`Object`](NodeKind::Object) node with one entry
///   per field, in declaration order. `#[reflect(skip)]` fields are left out.
/// - A list becomes a [`Sequence`](NodeKind::Sequence) node and a map a
///   [`Map`](NodeKind::Map) node, both in iteration order.
///
/// Every node records the runtime type path of its value, so a
/// `Box<dyn Reflect>` field round-trips with its concrete type. A boxed value
/// whose entry would not name its type (a `usize`, an `Option<T>`) is hosted
/// in a wrapper node carrying that type.
///
/// # Examples
///
/// ```
/// use sg_reflect::derive::Reflect;
/// use sg_serial::{FieldValue, Marshaller, NodeKind};
///
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "forest::Tree")]
/// struct Tree {
///     species: String,
///     heights: Vec<f32>,
/// }
///
/// let tree = Tree { species: "fir".into(), heights: vec![1.5, 3.0] };
/// let node = Marshaller.marshall(&tree).unwrap();
///
/// assert_eq!(node.declared_type, "forest::Tree");
/// assert_eq!(node.kind, NodeKind::Object);
///
/// let Some(FieldValue::Node(heights)) = node.get("heights") else { unreachable!() };
/// assert_eq!(heights.kind, NodeKind::Sequence);
/// assert_eq!(heights.declared_type, "alloc::vec::Vec<f32>");
/// assert_eq!(heights.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Marshaller;

impl Marshaller {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Marshalls `value`.
    ///
    /// # Errors
    ///
    /// [`MarshalError::Unsupported`] if `value` or one of its parts is opaque.
    pub fn marshall(&self, value: &dyn Reflect) -> Result<SerializedNode, MarshalError> {
        let value = TypeClassifier::runtime_value(value);
        let type_path = value.reflect_type_path();
        match self.marshall_value(value)? {
            FieldValue::Node(node) if node.declared_type == type_path => Ok(node),
            other => {
                log::trace!("wrapping `{type_path}` root value");
                Ok(SerializedNode::wrap(type_path, other))
            }
        }
    }

    fn marshall_value(&self, value: &dyn Reflect) -> Result<FieldValue, MarshalError> {
        let runtime = TypeClassifier::runtime_value(value);
        let marshalled = match TypeClassifier::classify(runtime) {
            Classified::Simple(simple) => FieldValue::Simple(simple),
            Classified::Compound(compound) => FieldValue::Node(self.marshall_compound(compound)?),
        };

        // Behind a `Box<dyn Reflect>` the reader only knows what the entry says.
        let runtime_type = runtime.reflect_type_path();
        let boxed = matches!(value.reflect_ref(), ReflectRef::Boxed(_));
        if boxed && marshalled.type_path() != Some(runtime_type) {
            log::trace!("recording boxed `{runtime_type}` in a wrapper");
            return Ok(FieldValue::Node(SerializedNode::wrap(runtime_type, marshalled)));
        }
        Ok(marshalled)
    }

    fn marshall_compound(&self, value: &dyn Reflect) -> Result<SerializedNode, MarshalError> {
        let type_path = value.reflect_type_path();
        log::trace!("marshalling `{type_path}`");

        match value.reflect_ref() {
            ReflectRef::Struct(fields) => self.marshall_struct(type_path, fields),
            ReflectRef::List(list) => self.marshall_list(type_path, list),
            ReflectRef::Map(map) => self.marshall_map(type_path, map),
            // An option inside a `Some`: the wrapper keeps its own null apart.
            // Classification of an option never stops at the option itself.
            ReflectRef::Optional(_) => Ok(SerializedNode::wrap(type_path, self.marshall_value(value)?)),
            ReflectRef::Scalar(_) | ReflectRef::Boxed(_) | ReflectRef::Opaque(_) => {
                Err(MarshalError::Unsupported { type_path })
            }
        }
    }

    fn marshall_struct(
        &self,
        type_path: &'static str,
        fields: &dyn Struct,
    ) -> Result<SerializedNode, MarshalError> {
        let mut node = SerializedNode::new(type_path, NodeKind::Object);
        for (name, field) in fields.iter_fields() {
            let value = self
                .marshall_value(field)
                .map_err(|err| err.in_field(type_path, name))?;
            node.push(name, value);
        }
        Ok(node)
    }

    fn marshall_list(
        &self,
        type_path: &'static str,
        list: &dyn List,
    ) -> Result<SerializedNode, MarshalError> {
        let mut node = SerializedNode::new(type_path, NodeKind::Sequence);
        for (index, item) in list.iter().enumerate() {
            let name = item_entry_name(index);
            let value = self
                .marshall_value(item)
                .map_err(|err| err.in_field(type_path, name.as_str()))?;
            node.push(name, value);
        }
        Ok(node)
    }

    fn marshall_map(
        &self,
        type_path: &'static str,
        map: &dyn Map,
    ) -> Result<SerializedNode, MarshalError> {
        let mut node = SerializedNode::new(type_path, NodeKind::Map);
        for (index, (key, value)) in map.iter().enumerate() {
            let key_name = key_entry_name(index);
            let key = self
                .marshall_value(key)
                .map_err(|err| err.in_field(type_path, key_name.as_str()))?;
            node.push(key_name, key);

            let value_name = value_entry_name(index);
            let value = self
                .marshall_value(value)
                .map_err(|err| err.in_field(type_path, value_name.as_str()))?;
            node.push(value_name, value);
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use sg_reflect::Reflect;
    use sg_reflect::derive::Reflect;
    use sg_reflect::ops::SimpleValue;

    use super::Marshaller;
    use crate::error::MarshalError;
    use crate::node::{FieldValue, NodeKind, SerializedNode};

    #[derive(Reflect, Default)]
    #[reflect(type_path = "tests::Leaf")]
    struct Leaf {
        area: f32,
        note: Option<String>,
        #[reflect(skip)]
        cached: u64,
    }

    #[derive(Reflect)]
    #[reflect(opaque)]
    struct Handle;

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Holder")]
    struct Holder {
        handle: Handle,
    }

    fn node_of(value: &FieldValue) -> &SerializedNode {
        value.as_node().unwrap()
    }

    #[test]
    fn string_root_is_wrapped() {
        let node = Marshaller.marshall(&String::from("hello")).unwrap();
        assert_eq!(node.kind, NodeKind::Wrapper);
        assert_eq!(node.declared_type, "alloc::string::String");
        assert_eq!(
            node.wrapped(),
            Some(&FieldValue::Simple(SimpleValue::from("hello")))
        );

        let none = Marshaller.marshall(&None::<i32>).unwrap();
        assert_eq!(none.declared_type, "core::option::Option<i32>");
        assert_eq!(none.wrapped(), Some(&FieldValue::Simple(SimpleValue::Null)));
    }

    #[test]
    fn struct_fields_in_order() {
        let leaf = Leaf {
            area: 0.5,
            note: None,
            cached: 99,
        };
        let node = Marshaller.marshall(&leaf).unwrap();

        let names: Vec<&str> = node.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["area", "note"]);
        assert_eq!(node.get("note"), Some(&FieldValue::Simple(SimpleValue::Null)));
        assert_eq!(node.get("cached"), None);
    }

    #[test]
    fn containers() {
        let mut map = BTreeMap::new();
        map.insert(String::from("b"), vec![2_u8]);
        map.insert(String::from("a"), vec![1_u8, 1]);

        let node = Marshaller.marshall(&map).unwrap();
        assert_eq!(node.kind, NodeKind::Map);
        assert_eq!(
            node.declared_type,
            "alloc::collections::BTreeMap<alloc::string::String, alloc::vec::Vec<u8>>"
        );

        let names: Vec<&str> = node.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["key[0]", "value[0]", "key[1]", "value[1]"]);
        assert_eq!(node.entries[0].value, FieldValue::Simple(SimpleValue::from("a")));

        let first = node_of(&node.entries[1].value);
        assert_eq!(first.kind, NodeKind::Sequence);
        assert_eq!(first.entries[1].name, "[1]");
        assert_eq!(first.entries[1].value, FieldValue::Simple(SimpleValue::U8(1)));
    }

    #[test]
    fn runtime_type_is_recorded() {
        let items: Vec<Box<dyn Reflect>> = vec![
            Box::new(Leaf::default()),
            Box::new(3_i8),
        ];
        let node = Marshaller.marshall(&items).unwrap();

        assert_eq!(node_of(&node.entries[0].value).declared_type, "tests::Leaf");
        assert_eq!(node.entries[1].value, FieldValue::Simple(SimpleValue::I8(3)));

        let boxed: Box<dyn Reflect> = Box::new(Leaf::default());
        assert_eq!(Marshaller.marshall(&boxed).unwrap().declared_type, "tests::Leaf");
    }

    #[test]
    fn boxed_simple_values_keep_their_type() {
        let items: Vec<Box<dyn Reflect>> = vec![
            Box::new(7_usize),
            Box::new(Some(3_u8)),
            Box::new(None::<u8>),
        ];
        let node = Marshaller.marshall(&items).unwrap();

        let usize_node = node_of(&node.entries[0].value);
        assert_eq!(usize_node.declared_type, "usize");
        assert_eq!(usize_node.wrapped(), Some(&FieldValue::Simple(SimpleValue::U64(7))));

        let some = node_of(&node.entries[1].value);
        assert_eq!(some.declared_type, "core::option::Option<u8>");
        assert_eq!(some.wrapped(), Some(&FieldValue::Simple(SimpleValue::U8(3))));

        let none = node_of(&node.entries[2].value);
        assert_eq!(none.declared_type, "core::option::Option<u8>");
        assert_eq!(none.wrapped(), Some(&FieldValue::Simple(SimpleValue::Null)));
    }

    #[test]
    fn inner_none_is_not_outer_none() {
        let node = Marshaller.marshall(&vec![Some(None::<u8>), None]).unwrap();

        let inner = node_of(&node.entries[0].value);
        assert_eq!(inner.kind, NodeKind::Wrapper);
        assert_eq!(inner.declared_type, "core::option::Option<u8>");
        assert_eq!(inner.wrapped(), Some(&FieldValue::Simple(SimpleValue::Null)));

        assert_eq!(node.entries[1].value, FieldValue::Simple(SimpleValue::Null));
    }

    #[test]
    fn container_errors_name_the_entry() {
        let err = Marshaller.marshall(&vec![Handle]).unwrap_err();
        assert!(matches!(
            err,
            MarshalError::Field { ref field, .. } if field == "[0]"
        ));

        let mut map = BTreeMap::new();
        map.insert(1_u8, Handle);
        let err = Marshaller.marshall(&map).unwrap_err();
        assert!(matches!(
            err,
            MarshalError::Field { ref field, .. } if field == "value[0]"
        ));
        assert!(matches!(err.root_cause(), MarshalError::Unsupported { .. }));
    }

    #[test]
    fn opaque_field_fails() {
        let err = Marshaller.marshall(&Holder { handle: Handle }).unwrap_err();
        assert!(matches!(
            err,
            MarshalError::Field { owner: "tests::Holder", ref field, .. } if field == "handle"
        ));
        assert!(matches!(err.root_cause(), MarshalError::Unsupported { .. }));
    }
}
