use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use std::path::Path;

use sg_reflect::ops::SimpleValue;

use crate::error::TransportError;
use crate::node::{FieldValue, SerializedNode};

/// A textual encoding of a [`SerializedNode`] tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Rusty Object Notation.
    #[default]
    Ron,
    Json,
}

impl Format {
    /// Guesses the format from a file extension (`ron` or `json`).
    ///
    /// ```
    /// use std::path::Path;
    /// use sg_serial::transport::Format;
    ///
    /// assert_eq!(Format::from_path(Path::new("stand.json")), Some(Format::Json));
    /// assert_eq!(Format::from_path(Path::new("stand.xml")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("ron") {
            Some(Self::Ron)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ron => "RON",
            Self::Json => "JSON",
        }
    }

    pub(crate) fn encode(self, node: &SerializedNode, pretty: bool) -> Result<String, TransportError> {
        // JSON has no NaN or infinity; serde_json would write `null` and fail to read it back.
        if self == Self::Json
            && let Some(entry) = find_non_finite(node)
        {
            return Err(TransportError::Encode {
                format: self,
                message: format!(
                    "entry `{entry}` of `{}` is not a finite number",
                    node.declared_type
                ),
            });
        }

        let encoded = match (self, pretty) {
            (Self::Ron, true) => ron::ser::to_string_pretty(node, ron::ser::PrettyConfig::default())
                .map_err(|err| err.to_string()),
            (Self::Ron, false) => ron::to_string(node).map_err(|err| err.to_string()),
            (Self::Json, true) => serde_json::to_string_pretty(node).map_err(|err| err.to_string()),
            (Self::Json, false) => serde_json::to_string(node).map_err(|err| err.to_string()),
        };
        encoded.map_err(|message| TransportError::Encode { format: self, message })
    }

    pub(crate) fn decode(self, text: &str) -> Result<SerializedNode, TransportError> {
        let decoded: Result<SerializedNode, String> = match self {
            Self::Ron => ron::from_str(text).map_err(|err| err.to_string()),
            Self::Json => serde_json::from_str(text).map_err(|err| err.to_string()),
        };
        decoded.map_err(|message| TransportError::Decode { format: self, message })
    }
}

// Returns the name of the first entry holding a NaN or infinite float.
fn find_non_finite(node: &SerializedNode) -> Option<String> {
    node.iter().find_map(|entry| match &entry.value {
        FieldValue::Simple(SimpleValue::F32(v)) if !v.is_finite() => Some(entry.name.clone()),
        FieldValue::Simple(SimpleValue::F64(v)) if !v.is_finite() => Some(entry.name.clone()),
        FieldValue::Simple(_) => None,
        FieldValue::Node(inner) => find_non_finite(inner),
    })
}

impl fmt::Display for Format {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
