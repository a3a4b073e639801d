//! Dirty tracking and upload to device-resident buffers.
//!
//! A block is either clean or dirty. [`UniformBlock::flush`](crate::uniforms::UniformBlock::flush)
//! hands the whole staging buffer to an [`UploadTarget`] only when dirty and
//! clears the flag only when the target reports success. Uploads are always
//! whole-buffer; there is no partial-range tracking.

mod device;
mod flush;

pub use device::{WgpuUploadTarget, create_uniform_buffer};

use crate::error::UploadError;

/// External device-buffer-update primitive.
///
/// Implementors copy `bytes` to offset 0 of a device-visible buffer. The call
/// may block for as long as the backend does.
pub trait UploadTarget {
    fn update_data(&mut self, bytes: &[u8]) -> Result<(), UploadError>;
}

/// What a flush did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FlushOutcome {
    /// The block was clean; the target was not called.
    Skipped,
    /// The whole staging buffer was handed to the target and the block is clean again.
    Uploaded,
}

impl FlushOutcome {
    #[inline]
    pub fn was_updated(self) -> bool {
        matches!(self, FlushOutcome::Uploaded)
    }
}
