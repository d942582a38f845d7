use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use sg_reflect::info::TypePath;
use sg_reflect::ops::{List, Map, ReflectMut, SimpleValue, Struct};
use sg_reflect::registry::{TypeRegistry, TypeTraitDefault};
use sg_reflect::Reflect;

use crate::class_names::ClassNameRegistry;
use crate::error::UnmarshalError;
use crate::node::{FieldEntry, FieldValue, NodeKind, SerializedNode};
use crate::node::{key_entry_name, value_entry_name};

// -----------------------------------------------------------------------------
// Unmarshaller

/// Rebuilds live values from [`SerializedNode`] trees.
///
/// Every compound value is first constructed as a zero value through the
/// [`TypeTraitDefault`] of its registered type, then populated entry by
/// entry. Invariants that constructors or setters would check are not
/// enforced.
///
/// - Declared types are resolved through the [`ClassNameRegistry`] first.
/// - Entries naming a field the current type does not have are dropped.
/// - A singleton wrapper is unwrapped to its single value.
///
/// # Examples
///
/// ```
/// use sg_reflect::{derive::Reflect, registry::TypeRegistry};
/// use sg_serial::{ClassNameRegistry, Marshaller, Unmarshaller};
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// #[reflect(default, type_path = "forest::Stand")]
/// struct Stand {
///     id: u32,
///     basal_area: Option<f64>,
/// }
///
/// let mut types = TypeRegistry::new();
/// types.register::<Stand>();
/// let names = ClassNameRegistry::new();
///
/// let stand = Stand { id: 12, basal_area: None };
/// let node = Marshaller.marshall(&stand).unwrap();
///
/// let back: Stand = Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap();
/// assert_eq!(back, stand);
/// ```
#[derive(Clone, Copy)]
pub struct Unmarshaller<'a> {
    types: &'a TypeRegistry,
    names: &'a ClassNameRegistry,
}

impl<'a> Unmarshaller<'a> {
    #[inline]
    pub const fn new(types: &'a TypeRegistry, names: &'a ClassNameRegistry) -> Self {
        Self { types, names }
    }

    #[inline]
    pub const fn types(&self) -> &'a TypeRegistry {
        self.types
    }

    #[inline]
    pub const fn names(&self) -> &'a ClassNameRegistry {
        self.names
    }

    /// Rebuilds the value described by `node`.
    ///
    /// # Errors
    ///
    /// - [`UnmarshalError::UnknownType`] if a declared type is not registered,
    ///   even after renames are applied.
    /// - [`UnmarshalError::NotConstructible`] if a registered type has no
    ///   [`TypeTraitDefault`].
    /// - Any other variant if the node does not fit the type it declares.
    ///
    /// No partial value is returned on failure.
    pub fn unmarshall(&self, node: &SerializedNode) -> Result<Box<dyn Reflect>, UnmarshalError> {
        self.build_node(node)
    }

    /// Rebuilds the value described by `node` as a `T`.
    pub fn unmarshall_as<T: Reflect + TypePath>(
        &self,
        node: &SerializedNode,
    ) -> Result<T, UnmarshalError> {
        let value = self.unmarshall(node)?;
        T::from_boxed(value).map_err(|rejected| UnmarshalError::Mismatch {
            expected: T::type_path(),
            received: (*rejected).reflect_type_path(),
        })
    }

    /// Populates an existing value from `node`.
    ///
    /// Fields without an entry keep their current value; lists and maps are
    /// cleared first.
    pub fn unmarshall_into(
        &self,
        node: &SerializedNode,
        target: &mut dyn Reflect,
    ) -> Result<(), UnmarshalError> {
        self.apply_node(target, node)
    }

    // -------------------------------------------------------------------------
    // Construction

    fn construct(&self, declared_type: &str) -> Result<Box<dyn Reflect>, UnmarshalError> {
        let resolved = self.names.resolve_nested(declared_type);
        if resolved != declared_type {
            log::debug!("reading `{declared_type}` as `{resolved}`");
        }
        self.instantiate(&resolved)
    }

    fn instantiate(&self, type_path: &str) -> Result<Box<dyn Reflect>, UnmarshalError> {
        let meta = self.types.get_with_type_path(type_path).ok_or_else(|| {
            UnmarshalError::UnknownType {
                type_path: String::from(type_path),
            }
        })?;
        let ctor = meta.get_trait::<TypeTraitDefault>().ok_or_else(|| {
            UnmarshalError::NotConstructible {
                type_path: String::from(type_path),
            }
        })?;
        Ok(ctor.default())
    }

    fn build_node(&self, node: &SerializedNode) -> Result<Box<dyn Reflect>, UnmarshalError> {
        if node.is_wrapper() {
            return self.build_wrapper(node);
        }
        let mut value = self.construct(&node.declared_type)?;
        self.populate(&mut *value, node)?;
        Ok(value)
    }

    fn build_wrapper(&self, node: &SerializedNode) -> Result<Box<dyn Reflect>, UnmarshalError> {
        let wrapped = self.wrapped(node)?;
        match self.construct(&node.declared_type) {
            Ok(mut value) => {
                self.apply_value(&mut *value, wrapped)?;
                Ok(value)
            }
            Err(err) => {
                log::debug!("{err}; using the wrapped value's own type");
                match wrapped {
                    FieldValue::Node(inner) => self.build_node(inner),
                    FieldValue::Simple(simple) => simple.to_reflect().ok_or(err),
                }
            }
        }
    }

    // Builds an element of a container whose static element type is `type_path`.
    fn build_item(
        &self,
        type_path: &'static str,
        value: &FieldValue,
    ) -> Result<Box<dyn Reflect>, UnmarshalError> {
        match self.instantiate(type_path) {
            Ok(mut item) => {
                self.apply_value(&mut *item, value)?;
                Ok(item)
            }
            // `Box<dyn Reflect>` elements: the entry knows the runtime type.
            Err(err) => match value {
                FieldValue::Node(node) => self.build_node(node),
                FieldValue::Simple(simple) => simple.to_reflect().ok_or(err),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Assignment

    fn apply_value(&self, target: &mut dyn Reflect, value: &FieldValue) -> Result<(), UnmarshalError> {
        match value {
            FieldValue::Simple(simple) => self.apply_simple(target, simple),
            FieldValue::Node(node) => self.apply_node(target, node),
        }
    }

    fn apply_simple(&self, target: &mut dyn Reflect, value: &SimpleValue) -> Result<(), UnmarshalError> {
        let type_path = target.reflect_type_path();
        match target.reflect_mut() {
            ReflectMut::Scalar(scalar) => scalar.assign(value)?,
            ReflectMut::Optional(option) => {
                if value.is_null() {
                    option.clear();
                } else {
                    self.apply_simple(option.get_or_insert_default(), value)?;
                }
            }
            ReflectMut::Boxed(slot) => {
                *slot = value.to_reflect().ok_or(UnmarshalError::Mismatch {
                    expected: type_path,
                    received: value.describe(),
                })?;
            }
            ReflectMut::Struct(_) | ReflectMut::List(_) | ReflectMut::Map(_) | ReflectMut::Opaque(_) => {
                return Err(UnmarshalError::Mismatch {
                    expected: type_path,
                    received: value.describe(),
                });
            }
        }
        Ok(())
    }

    fn apply_node(&self, target: &mut dyn Reflect, node: &SerializedNode) -> Result<(), UnmarshalError> {
        let type_path = target.reflect_type_path();
        let same_type = self.names.resolve_nested(&node.declared_type) == type_path;

        if node.is_wrapper() && same_type {
            let inner = self.wrapped(node)?;
            return self.apply_value(target, inner);
        }

        match target.reflect_mut() {
            ReflectMut::Boxed(slot) => {
                *slot = self.build_node(node)?;
                return Ok(());
            }
            ReflectMut::Optional(option) => {
                return self.apply_node(option.get_or_insert_default(), node);
            }
            _ => {}
        }

        if node.is_wrapper() {
            let inner = self.wrapped(node)?;
            return self.apply_value(target, inner);
        }

        if same_type {
            // The slot already holds a zero value of the declared type.
            return self.populate(target, node);
        }

        let value = self.build_node(node)?;
        target.set(value).map_err(|rejected| UnmarshalError::Mismatch {
            expected: type_path,
            received: (*rejected).reflect_type_path(),
        })
    }

    // -------------------------------------------------------------------------
    // Population

    fn populate(&self, target: &mut dyn Reflect, node: &SerializedNode) -> Result<(), UnmarshalError> {
        log::trace!("populating `{}` from a {} node", target.reflect_type_path(), node.kind);
        match node.kind {
            NodeKind::Object => self.populate_struct(target.reflect_mut().as_struct()?, node),
            NodeKind::Sequence => self.populate_list(target.reflect_mut().as_list()?, node),
            NodeKind::Map => self.populate_map(target.reflect_mut().as_map()?, node),
            NodeKind::Wrapper => {
                let inner = self.wrapped(node)?;
                self.apply_value(target, inner)
            }
        }
    }

    fn populate_struct(&self, target: &mut dyn Struct, node: &SerializedNode) -> Result<(), UnmarshalError> {
        let owner = target.reflect_type_path();
        for FieldEntry { name, value } in node {
            match target.field_mut(name) {
                Some(field) => self
                    .apply_value(field, value)
                    .map_err(|err| err.in_field(owner, name.as_str()))?,
                None => log::debug!("`{owner}` has no field `{name}`, entry dropped"),
            }
        }
        Ok(())
    }

    fn populate_list(&self, target: &mut dyn List, node: &SerializedNode) -> Result<(), UnmarshalError> {
        let item_type = target.item_type_path();
        target.clear();
        for FieldEntry { value, .. } in node {
            let item = self.build_item(item_type, value)?;
            target.push_boxed(item).map_err(|rejected| UnmarshalError::Mismatch {
                expected: item_type,
                received: (*rejected).reflect_type_path(),
            })?;
        }
        Ok(())
    }

    fn populate_map(&self, target: &mut dyn Map, node: &SerializedNode) -> Result<(), UnmarshalError> {
        let map_type = target.reflect_type_path();
        let key_type = target.key_type_path();
        let value_type = target.value_type_path();
        target.clear();
        for (index, pair) in node.entries.chunks(2).enumerate() {
            let [key, value] = pair else {
                return Err(malformed(node, format!("`{}` has no value", pair[0].name)));
            };
            if key.name != key_entry_name(index) || value.name != value_entry_name(index) {
                return Err(malformed(
                    node,
                    format!("expected pair #{index}, found `{}` and `{}`", key.name, value.name),
                ));
            }

            let key = self.build_item(key_type, &key.value)?;
            let value = self.build_item(value_type, &value.value)?;
            target.insert_boxed(key, value).map_err(|rejected| UnmarshalError::Mismatch {
                expected: map_type,
                received: (*rejected).reflect_type_path(),
            })?;
        }
        Ok(())
    }

    fn wrapped<'n>(&self, node: &'n SerializedNode) -> Result<&'n FieldValue, UnmarshalError> {
        node.wrapped()
            .ok_or_else(|| malformed(node, String::from("a wrapper holds exactly one `value` entry")))
    }
}

#[inline]
fn malformed(node: &SerializedNode, reason: String) -> UnmarshalError {
    UnmarshalError::MalformedNode {
        declared_type: node.declared_type.clone(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use sg_reflect::Reflect;
    use sg_reflect::derive::Reflect;
    use sg_reflect::info::TypePath;
    use sg_reflect::ops::SimpleValue;
    use sg_reflect::registry::{GetTypeMeta, TypeRegistry};

    use super::Unmarshaller;
    use crate::class_names::ClassNameRegistry;
    use crate::error::UnmarshalError;
    use crate::marshaller::Marshaller;
    use crate::node::{FieldValue, NodeKind, SerializedNode};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default, type_path = "tests::Leaf")]
    struct Leaf {
        area: f32,
        note: Option<String>,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default, type_path = "tests::Tree")]
    struct Tree {
        species: String,
        age: u16,
        leaves: Vec<Leaf>,
        tags: BTreeMap<String, i64>,
        crown: Option<Leaf>,
        #[reflect(skip)]
        visits: u32,
    }

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(default, type_path = "tests::Memo")]
    struct Memo {
        text: Option<String>,
    }

    impl Default for Memo {
        fn default() -> Self {
            Self {
                text: Some(String::from("draft")),
            }
        }
    }

    #[derive(Reflect)]
    #[reflect(default, type_path = "tests::Basket")]
    struct Basket {
        items: Vec<Box<dyn Reflect>>,
        slot: Box<dyn Reflect>,
    }

    impl Default for Basket {
        fn default() -> Self {
            Self {
                items: Vec::new(),
                slot: Box::new(0_u8),
            }
        }
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default, type_path = "tests::Reading")]
    struct Reading {
        value: Option<Option<u8>>,
    }

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(type_path = "tests::Sealed")]
    struct Sealed {
        code: u8,
    }

    fn round_trip<T: Reflect + TypePath + GetTypeMeta>(value: &T) -> T {
        let mut types = TypeRegistry::new();
        types.register::<T>();
        let names = ClassNameRegistry::new();

        let node = Marshaller.marshall(value).unwrap();
        Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap()
    }

    fn rename_all(node: &mut SerializedNode, from: &str, to: &str) {
        node.declared_type = node.declared_type.replace(from, to);
        for entry in &mut node.entries {
            if let FieldValue::Node(inner) = &mut entry.value {
                rename_all(inner, from, to);
            }
        }
    }

    fn sample_tree() -> Tree {
        let mut tags = BTreeMap::new();
        tags.insert(String::from("plot"), 14);
        tags.insert(String::from("block"), -2);
        Tree {
            species: String::from("balsam fir"),
            age: 42,
            leaves: vec![
                Leaf { area: 1.5, note: None },
                Leaf { area: 0.25, note: Some(String::from("scarred")) },
            ],
            tags,
            crown: Some(Leaf { area: 9.0, note: None }),
            visits: 3,
        }
    }

    #[test]
    fn simple_values_round_trip() {
        assert_eq!(round_trip(&-17_i32), -17);
        assert_eq!(round_trip(&u128::MAX), u128::MAX);
        assert_eq!(round_trip(&2.75_f64), 2.75);
        assert!(round_trip(&true));
        assert_eq!(round_trip(&'é'), 'é');
        assert_eq!(round_trip(&String::from("hello")), "hello");
        assert_eq!(round_trip(&None::<i32>), None);
        assert_eq!(round_trip(&Some(8_u8)), Some(8));
    }

    #[test]
    fn wrapper_unwraps_to_the_value() {
        let types = TypeRegistry::new();
        let names = ClassNameRegistry::new();

        let node = Marshaller.marshall(&String::from("hello")).unwrap();
        assert!(node.is_wrapper());

        let value = Unmarshaller::new(&types, &names).unmarshall(&node).unwrap();
        assert_eq!(value.take::<String>().unwrap(), "hello");
    }

    #[test]
    fn unregistered_wrapper_uses_the_simple_type() {
        let types = TypeRegistry::empty();
        let names = ClassNameRegistry::new();

        let node = SerializedNode::wrap("gone::Count", SimpleValue::U16(4));
        let value = Unmarshaller::new(&types, &names).unmarshall(&node).unwrap();
        assert_eq!(value.downcast_ref::<u16>(), Some(&4));

        let null = SerializedNode::wrap("gone::Count", SimpleValue::Null);
        let err = Unmarshaller::new(&types, &names).unmarshall(&null).unwrap_err();
        assert!(matches!(err, UnmarshalError::UnknownType { .. }));
    }

    #[test]
    fn compound_round_trip() {
        let tree = sample_tree();
        let back = round_trip(&tree);

        assert_eq!(back.species, tree.species);
        assert_eq!(back.age, tree.age);
        assert_eq!(back.leaves, tree.leaves);
        assert_eq!(back.tags, tree.tags);
        assert_eq!(back.crown, tree.crown);
        // skipped fields come back as their default
        assert_eq!(back.visits, 0);
    }

    #[test]
    fn sequence_order_is_kept() {
        let words = vec![String::from("c"), String::from("a"), String::from("b")];
        assert_eq!(round_trip(&words), words);

        let queue: VecDeque<i16> = VecDeque::from([3, -1, 2]);
        assert_eq!(round_trip(&queue), queue);
    }

    #[test]
    fn map_pairs_are_kept() {
        let mut map: HashMap<u32, String> = HashMap::new();
        for id in 0..20 {
            map.insert(id, format!("stem-{id}"));
        }
        assert_eq!(round_trip(&map), map);

        let mut nested: BTreeMap<String, Vec<Leaf>> = BTreeMap::new();
        nested.insert(String::from("north"), vec![Leaf { area: 2.0, note: None }]);
        nested.insert(String::from("south"), Vec::new());
        assert_eq!(round_trip(&nested), nested);
    }

    #[test]
    fn broken_map_pairs_are_rejected() {
        let mut types = TypeRegistry::new();
        types.register::<BTreeMap<u8, u8>>();
        let names = ClassNameRegistry::new();
        let unmarshaller = Unmarshaller::new(&types, &names);

        let map = BTreeMap::from([(1_u8, 10_u8), (2, 20)]);
        let node = Marshaller.marshall(&map).unwrap();

        let mut dangling = node.clone();
        dangling.entries.pop();
        assert!(matches!(
            unmarshaller.unmarshall(&dangling),
            Err(UnmarshalError::MalformedNode { .. })
        ));

        let mut swapped = node.clone();
        swapped.entries.swap(0, 1);
        assert!(matches!(
            unmarshaller.unmarshall(&swapped),
            Err(UnmarshalError::MalformedNode { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let leaf = Leaf { area: 3.5, note: Some(String::from("kept")) };
        let mut node = Marshaller.marshall(&leaf).unwrap();
        node.push("extra", SimpleValue::I32(5));
        node.push("retired", SerializedNode::new("tests::Gone", NodeKind::Object));

        let mut types = TypeRegistry::new();
        types.register::<Leaf>();
        let names = ClassNameRegistry::new();

        let back: Leaf = Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap();
        assert_eq!(back, leaf);
    }

    #[test]
    fn null_field_stays_null() {
        assert_eq!(round_trip(&Memo { text: None }), Memo { text: None });
        assert_eq!(
            round_trip(&Memo { text: Some(String::from("final")) }),
            Memo { text: Some(String::from("final")) }
        );
    }

    #[test]
    fn renamed_types_resolve() {
        let mut node = Marshaller.marshall(&sample_tree()).unwrap();
        rename_all(&mut node, "tests::Leaf", "legacy::Leaf");
        rename_all(&mut node, "tests::Tree", "legacy::Tree");

        let mut types = TypeRegistry::new();
        types.register::<Tree>();

        let empty = ClassNameRegistry::new();
        let err = Unmarshaller::new(&types, &empty).unmarshall(&node).unwrap_err();
        assert_eq!(
            err,
            UnmarshalError::UnknownType { type_path: String::from("legacy::Tree") }
        );

        let mut names = ClassNameRegistry::new();
        names.register("legacy::Tree", "tests::Tree");
        names.register("legacy::Leaf", "tests::Leaf");

        let back: Tree = Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap();
        assert_eq!(back.leaves, sample_tree().leaves);
        assert_eq!(back.crown, sample_tree().crown);
    }

    #[test]
    fn unknown_nested_type_fails() {
        let mut node = Marshaller.marshall(&sample_tree()).unwrap();
        rename_all(&mut node, "tests::Leaf", "legacy::Leaf");

        let mut types = TypeRegistry::new();
        types.register::<Tree>();
        let names = ClassNameRegistry::new();

        let err = Unmarshaller::new(&types, &names).unmarshall(&node).unwrap_err();
        assert!(matches!(err, UnmarshalError::Field { owner: "tests::Tree", .. }));
        assert_eq!(
            err.root_cause(),
            &UnmarshalError::UnknownType {
                type_path: String::from("alloc::vec::Vec<legacy::Leaf>")
            }
        );
    }

    #[test]
    fn polymorphic_slots_keep_their_runtime_type() {
        let basket = Basket {
            items: vec![
                Box::new(Leaf { area: 4.0, note: None }),
                Box::new(5_u16),
                Box::new(String::from("cone")),
            ],
            slot: Box::new(2.5_f32),
        };

        let mut types = TypeRegistry::new();
        types.register::<Basket>();
        types.register::<Leaf>();
        let names = ClassNameRegistry::new();

        let node = Marshaller.marshall(&basket).unwrap();
        let back: Basket = Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap();

        assert_eq!(back.items.len(), 3);
        assert_eq!(
            back.items[0].downcast_ref::<Leaf>(),
            Some(&Leaf { area: 4.0, note: None })
        );
        assert_eq!(back.items[1].downcast_ref::<u16>(), Some(&5));
        assert_eq!(back.items[2].downcast_ref::<String>().map(String::as_str), Some("cone"));
        assert_eq!(back.slot.downcast_ref::<f32>(), Some(&2.5));
    }

    #[test]
    fn boxed_simple_values_keep_their_runtime_type() {
        let basket = Basket {
            items: vec![
                Box::new(7_usize),
                Box::new(Some(3_u8)),
                Box::new(None::<u8>),
                Box::new(Some(None::<u8>)),
            ],
            slot: Box::new(-2_isize),
        };

        let mut types = TypeRegistry::new();
        types.register::<Basket>();
        types.register::<Option<u8>>();
        types.register::<Option<Option<u8>>>();
        let names = ClassNameRegistry::new();

        let node = Marshaller.marshall(&basket).unwrap();
        let back: Basket = Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap();

        assert_eq!(back.items.len(), 4);
        assert_eq!(back.items[0].downcast_ref::<usize>(), Some(&7));
        assert_eq!(back.items[1].downcast_ref::<Option<u8>>(), Some(&Some(3)));
        assert_eq!(back.items[2].downcast_ref::<Option<u8>>(), Some(&None));
        assert_eq!(
            back.items[3].downcast_ref::<Option<Option<u8>>>(),
            Some(&Some(None))
        );
        assert_eq!(back.slot.downcast_ref::<isize>(), Some(&-2));
    }

    #[test]
    fn nested_options_round_trip() {
        for value in [None, Some(None), Some(Some(4_u8))] {
            assert_eq!(round_trip(&Reading { value }), Reading { value });
            assert_eq!(round_trip(&value), value);
        }

        let deep: Option<Option<Option<u8>>> = Some(Some(None));
        assert_eq!(round_trip(&deep), deep);
    }

    #[test]
    fn types_without_default_are_not_constructible() {
        let mut types = TypeRegistry::new();
        types.register::<Sealed>();
        let names = ClassNameRegistry::new();

        let node = Marshaller.marshall(&Sealed { code: 1 }).unwrap();
        let err = Unmarshaller::new(&types, &names).unmarshall(&node).unwrap_err();
        assert_eq!(
            err,
            UnmarshalError::NotConstructible { type_path: String::from("tests::Sealed") }
        );

        // an existing value can still be populated
        let mut sealed = Sealed { code: 0 };
        Unmarshaller::new(&types, &names)
            .unmarshall_into(&node, &mut sealed)
            .unwrap();
        assert_eq!(sealed.code, 1);
    }

    #[test]
    fn numeric_widths_may_drift() {
        let mut node = SerializedNode::new("tests::Leaf", NodeKind::Object);
        node.push("area", SimpleValue::F64(0.5));

        let mut types = TypeRegistry::new();
        types.register::<Leaf>();
        let names = ClassNameRegistry::new();
        let back: Leaf = Unmarshaller::new(&types, &names).unmarshall_as(&node).unwrap();
        assert_eq!(back.area, 0.5);

        let mut tree = SerializedNode::new("tests::Tree", NodeKind::Object);
        tree.push("age", SimpleValue::I64(120));
        types.register::<Tree>();
        let back: Tree = Unmarshaller::new(&types, &names).unmarshall_as(&tree).unwrap();
        assert_eq!(back.age, 120);
    }

    #[test]
    fn wrong_values_name_the_field() {
        let mut node = SerializedNode::new("tests::Leaf", NodeKind::Object);
        node.push("area", SimpleValue::from("wide"));

        let mut types = TypeRegistry::new();
        types.register::<Leaf>();
        let names = ClassNameRegistry::new();

        let err = Unmarshaller::new(&types, &names).unmarshall(&node).unwrap_err();
        match err {
            UnmarshalError::Field { owner, field, source } => {
                assert_eq!((owner, field.as_str()), ("tests::Leaf", "area"));
                assert!(matches!(*source, UnmarshalError::Assign(_)));
            }
            other => panic!("expected a field error, found {other:?}"),
        }
    }

    #[test]
    fn object_node_for_a_list_is_a_kind_error() {
        let mut types = TypeRegistry::new();
        types.register::<Vec<u8>>();
        let names = ClassNameRegistry::new();

        let node = SerializedNode::new("alloc::vec::Vec<u8>", NodeKind::Object);
        let err = Unmarshaller::new(&types, &names).unmarshall(&node).unwrap_err();
        assert!(matches!(err, UnmarshalError::Kind(_)));
    }
}
