use alloc::boxed::Box;
use alloc::string::String;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use sg_reflect::Reflect;
use sg_reflect::info::TypePath;

use crate::error::TransportError;
use crate::node::SerializedNode;
use crate::transport::Format;
use crate::unmarshaller::Unmarshaller;

enum Source<'a> {
    File(PathBuf),
    Reader(Box<dyn Read + 'a>),
}

/// Reads serialized trees from a file or any [`Read`].
///
/// [`read_object`](Self::read_object) unmarshalls the tree; a singleton
/// wrapper comes back as the value it hosts.
///
/// # Examples
///
/// ```
/// use sg_reflect::registry::TypeRegistry;
/// use sg_serial::ClassNameRegistry;
/// use sg_serial::Unmarshaller;
/// use sg_serial::transport::{Deserializer, Serializer};
///
/// let mut bytes = Vec::new();
/// Serializer::to_writer(&mut bytes).write_object(&String::from("hello")).unwrap();
///
/// let types = TypeRegistry::new();
/// let names = ClassNameRegistry::new();
/// let unmarshaller = Unmarshaller::new(&types, &names);
///
/// let text: String = Deserializer::from_reader(bytes.as_slice())
///     .read_object_as(&unmarshaller)
///     .unwrap();
/// assert_eq!(text, "hello");
/// ```
pub struct Deserializer<'a> {
    source: Source<'a>,
    format: Format,
}

impl<'a> Deserializer<'a> {
    /// Reads from `path`.
    ///
    /// The format is guessed from the extension, falling back to RON.
    ///
    /// # Errors
    ///
    /// [`TransportError::NotAFile`] if `path` is a directory or does not exist.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TransportError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            format: Format::from_path(path).unwrap_or_default(),
            source: Source::File(path.to_path_buf()),
        })
    }

    pub fn from_reader(reader: impl Read + 'a) -> Self {
        Self {
            source: Source::Reader(Box::new(reader)),
            format: Format::default(),
        }
    }

    #[inline]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Reads the serialized tree without unmarshalling it.
    ///
    /// A reader is consumed to its end.
    pub fn read_node(&mut self) -> Result<SerializedNode, TransportError> {
        let text = match &mut self.source {
            Source::File(path) => {
                log::debug!("reading {}", path.display());
                fs::read_to_string(path)?
            }
            Source::Reader(reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                text
            }
        };
        self.format.decode(&text)
    }

    /// Reads and unmarshalls a value.
    pub fn read_object(
        &mut self,
        unmarshaller: &Unmarshaller<'_>,
    ) -> Result<Box<dyn Reflect>, TransportError> {
        let node = self.read_node()?;
        Ok(unmarshaller.unmarshall(&node)?)
    }

    /// Reads and unmarshalls a value of type `T`.
    pub fn read_object_as<T: Reflect + TypePath>(
        &mut self,
        unmarshaller: &Unmarshaller<'_>,
    ) -> Result<T, TransportError> {
        let node = self.read_node()?;
        Ok(unmarshaller.unmarshall_as(&node)?)
    }
}
