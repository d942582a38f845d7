//! The transport boundary: turns a [`SerializedNode`] tree into text and back.
//!
//! The core never touches files or streams. [`Serializer`] and
//! [`Deserializer`] compose it with a textual [`Format`] for callers that
//! want a value persisted in one call.
//!
//! [`SerializedNode`]: crate::SerializedNode

// -----------------------------------------------------------------------------
// Modules

mod deserializer;
mod format;
mod serializer;

// -----------------------------------------------------------------------------
// Exports

pub use deserializer::Deserializer;
pub use format::Format;
pub use serializer::Serializer;

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::fs;
    use std::path::PathBuf;

    use sg_reflect::derive::Reflect;
    use sg_reflect::registry::TypeRegistry;

    use super::{Deserializer, Format, Serializer};
    use crate::class_names::ClassNameRegistry;
    use crate::error::TransportError;
    use crate::unmarshaller::Unmarshaller;

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default, type_path = "tests::Survey")]
    struct Survey {
        crew: Vec<String>,
        counts: BTreeMap<String, u32>,
        slope: Option<f64>,
        aspect: Option<char>,
    }

    fn sample() -> Survey {
        Survey {
            crew: vec![String::from("Ana"), String::from("Joël")],
            counts: BTreeMap::from([(String::from("fir"), 12), (String::from("birch"), 3)]),
            slope: Some(0.125),
            aspect: None,
        }
    }

    fn registry() -> TypeRegistry {
        let mut types = TypeRegistry::new();
        types.register::<Survey>();
        types
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sg_serial_{}_{name}", std::process::id()))
    }

    fn round_trip_with(format: Format, pretty: bool) {
        let mut bytes = Vec::new();
        Serializer::to_writer(&mut bytes)
            .with_format(format)
            .with_pretty(pretty)
            .write_object(&sample())
            .unwrap();

        let types = registry();
        let names = ClassNameRegistry::new();
        let back: Survey = Deserializer::from_reader(bytes.as_slice())
            .with_format(format)
            .read_object_as(&Unmarshaller::new(&types, &names))
            .unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn ron_round_trip() {
        round_trip_with(Format::Ron, true);
        round_trip_with(Format::Ron, false);
    }

    #[test]
    fn json_round_trip() {
        round_trip_with(Format::Json, true);
        round_trip_with(Format::Json, false);
    }

    #[test]
    fn json_rejects_non_finite_floats() {
        let survey = Survey {
            slope: Some(f64::NAN),
            ..sample()
        };

        let mut bytes = Vec::new();
        let err = Serializer::to_writer(&mut bytes)
            .with_format(Format::Json)
            .write_object(&survey)
            .unwrap_err();
        match err {
            TransportError::Encode { format, message } => {
                assert_eq!(format, Format::Json);
                assert!(message.contains("`slope`"), "{message}");
            }
            other => panic!("expected an encode error, found {other:?}"),
        }
        assert!(bytes.is_empty());

        // RON keeps NaN.
        let mut bytes = Vec::new();
        Serializer::to_writer(&mut bytes).write_object(&survey).unwrap();
        let types = registry();
        let names = ClassNameRegistry::new();
        let back: Survey = Deserializer::from_reader(bytes.as_slice())
            .read_object_as(&Unmarshaller::new(&types, &names))
            .unwrap();
        assert!(back.slope.is_some_and(f64::is_nan));
    }

    #[test]
    fn file_round_trip() {
        let path = temp_path("survey.json");
        let mut serializer = Serializer::to_path(&path);
        assert_eq!(serializer.format(), Format::Json);
        serializer.write_object(&sample()).unwrap();

        let types = registry();
        let names = ClassNameRegistry::new();
        let mut deserializer = Deserializer::from_path(&path).unwrap();
        let node = deserializer.read_node().unwrap();
        assert_eq!(node.declared_type, "tests::Survey");

        let back = deserializer.read_object(&Unmarshaller::new(&types, &names)).unwrap();
        assert_eq!(back.take::<Survey>().unwrap(), sample());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn not_a_file() {
        let missing = temp_path("missing.ron");
        assert!(matches!(
            Deserializer::from_path(&missing),
            Err(TransportError::NotAFile { path }) if path == missing
        ));
        assert!(matches!(
            Deserializer::from_path(std::env::temp_dir()),
            Err(TransportError::NotAFile { .. })
        ));
    }

    #[test]
    fn garbage_input() {
        let err = Deserializer::from_reader("not a node".as_bytes())
            .read_node()
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode { format: Format::Ron, .. }));
    }
}
