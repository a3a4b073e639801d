//! Error types for uniform writes and uploads.
//!
//! Every setter error is a caller programming error detected before any byte
//! is written, so the staging buffer and dirty flag are unchanged when one is
//! returned. Whether to treat them as fatal is up to the caller.

use thiserror::Error;

use crate::layout::UniformType;

/// Failure reported by a [`UniformBlock`](crate::uniforms::UniformBlock) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniformError {
    /// The handle's index is outside `[0, len)` of the descriptor table.
    #[error("uniform handle {index} is out of range (table holds {len} uniforms)")]
    InvalidHandle { index: u32, len: usize },

    /// The value type does not match the declared shape/element type.
    #[error("uniform `{name}` is declared as {declared}, cannot write {requested}")]
    TypeMismatch {
        name: String,
        declared: UniformType,
        requested: UniformType,
    },

    /// The element count is zero or exceeds the declared capacity.
    #[error("uniform `{name}` holds {capacity} element(s), cannot write {requested}")]
    ArrayBoundsExceeded {
        name: String,
        requested: usize,
        capacity: usize,
    },

    /// The device-side copy failed; the block stays dirty so the flush can be retried.
    #[error("uniform upload failed")]
    FlushFailed(#[source] UploadError),
}

/// Failure reported by an [`UploadTarget`](crate::upload::UploadTarget).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("staging data is {len} bytes but the device buffer holds only {capacity}")]
    BufferTooSmall { len: u64, capacity: u64 },

    #[error("staging data length {len} is not a multiple of {alignment}")]
    Misaligned { len: u64, alignment: u64 },

    /// Any other backend failure, described by the backend.
    #[error("device upload failed: {0}")]
    Device(String),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn type_mismatch_names_both_types() {
        let err = UniformError::TypeMismatch {
            name: "u_mvp".into(),
            declared: UniformType::Float4x4,
            requested: UniformType::Float,
        };
        assert_eq!(
            err.to_string(),
            "uniform `u_mvp` is declared as float4x4, cannot write float"
        );
    }

    #[test]
    fn flush_failure_keeps_source() {
        let err = UniformError::FlushFailed(UploadError::BufferTooSmall { len: 32, capacity: 16 });
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("staging data is 32 bytes but the device buffer holds only 16")
        );
    }
}
