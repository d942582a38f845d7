use alloc::boxed::Box;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sg_reflect::Reflect;

use crate::error::TransportError;
use crate::marshaller::Marshaller;
use crate::node::SerializedNode;
use crate::transport::Format;

enum Sink<'a> {
    File(PathBuf),
    Writer(Box<dyn Write + 'a>),
}

/// Writes marshalled values to a file or any [`Write`].
///
/// Output is pretty-printed [`Format::Ron`] unless configured otherwise.
///
/// # Examples
///
/// ```
/// use sg_serial::transport::{Format, Serializer};
///
/// let mut out = Vec::new();
/// Serializer::to_writer(&mut out)
///     .with_format(Format::Json)
///     .with_pretty(false)
///     .write_object(&vec![1_u8, 2])
///     .unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with(r#"{"declared_type":"alloc::vec::Vec<u8>","kind":"Sequence""#));
/// ```
pub struct Serializer<'a> {
    sink: Sink<'a>,
    format: Format,
    pretty: bool,
}

impl<'a> Serializer<'a> {
    /// Writes to `path`, replacing its content.
    ///
    /// The format is guessed from the extension, falling back to RON.
    pub fn to_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            format: Format::from_path(path).unwrap_or_default(),
            sink: Sink::File(path.to_path_buf()),
            pretty: true,
        }
    }

    pub fn to_writer(writer: impl Write + 'a) -> Self {
        Self {
            sink: Sink::Writer(Box::new(writer)),
            format: Format::default(),
            pretty: true,
        }
    }

    #[inline]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Marshalls `value` and writes the resulting tree.
    pub fn write_object(&mut self, value: &dyn Reflect) -> Result<(), TransportError> {
        let node = Marshaller.marshall(value)?;
        self.write_node(&node)
    }

    pub fn write_node(&mut self, node: &SerializedNode) -> Result<(), TransportError> {
        let text = self.format.encode(node, self.pretty)?;
        match &mut self.sink {
            Sink::File(path) => {
                log::debug!("writing `{}` to {}", node.declared_type, path.display());
                fs::write(path, text)?;
            }
            Sink::Writer(writer) => {
                writer.write_all(text.as_bytes())?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}
