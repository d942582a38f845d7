use alloc::boxed::Box;
use alloc::string::String;
use std::io;
use std::path::PathBuf;

use sg_reflect::info::ReflectKindError;
use sg_reflect::ops::AssignError;
use thiserror::Error;

use crate::transport::Format;

// -----------------------------------------------------------------------------
// MarshalError

/// A live value could not be decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("values of `{type_path}` cannot be decomposed")]
    Unsupported { type_path: &'static str },
    #[error("field `{field}` of `{owner}`: {source}")]
    Field {
        owner: &'static str,
        field: String,
        source: Box<MarshalError>,
    },
}

impl MarshalError {
    /// Records that the error happened while reading `owner.field`.
    #[inline]
    pub fn in_field(self, owner: &'static str, field: impl Into<String>) -> Self {
        Self::Field {
            owner,
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping the field path.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// -----------------------------------------------------------------------------
// UnmarshalError

/// A serialized node could not be turned back into a live value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnmarshalError {
    #[error("unknown type `{type_path}`")]
    UnknownType { type_path: String },
    #[error("type `{type_path}` is not constructible")]
    NotConstructible { type_path: String },
    #[error("expected a `{expected}` value, found `{received}`")]
    Mismatch {
        expected: &'static str,
        received: &'static str,
    },
    #[error(transparent)]
    Assign(#[from] AssignError),
    #[error(transparent)]
    Kind(#[from] ReflectKindError),
    #[error("malformed `{declared_type}` node: {reason}")]
    MalformedNode {
        declared_type: String,
        reason: String,
    },
    #[error("field `{field}` of `{owner}`: {source}")]
    Field {
        owner: &'static str,
        field: String,
        source: Box<UnmarshalError>,
    },
}

impl UnmarshalError {
    /// Records that the error happened while assigning `owner.field`.
    #[inline]
    pub fn in_field(self, owner: &'static str, field: impl Into<String>) -> Self {
        Self::Field {
            owner,
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping the field path.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// -----------------------------------------------------------------------------
// TransportError

/// Reading or writing a serialized tree failed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("`{}` is either a directory or does not exist", .path.display())]
    NotAFile { path: PathBuf },
    #[error("cannot encode {format}: {message}")]
    Encode { format: Format, message: String },
    #[error("cannot decode {format}: {message}")]
    Decode { format: Format, message: String },
    #[error(transparent)]
    Marshal(#[from] MarshalError),
    #[error(transparent)]
    Unmarshal(#[from] UnmarshalError),
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{MarshalError, UnmarshalError};

    #[test]
    fn field_path_in_message() {
        let err = UnmarshalError::UnknownType {
            type_path: "pkg::Gone".into(),
        }
        .in_field("pkg::Leaf", "shape")
        .in_field("pkg::Tree", "leaf");

        assert_eq!(
            err.to_string(),
            "field `leaf` of `pkg::Tree`: field `shape` of `pkg::Leaf`: unknown type `pkg::Gone`"
        );
        assert!(matches!(
            err.root_cause(),
            UnmarshalError::UnknownType { .. }
        ));
    }

    #[test]
    fn unsupported_value() {
        let err = MarshalError::Unsupported { type_path: "pkg::Handle" }.in_field("pkg::Tree", "handle");
        assert_eq!(
            err.root_cause(),
            &MarshalError::Unsupported { type_path: "pkg::Handle" }
        );
    }
}
