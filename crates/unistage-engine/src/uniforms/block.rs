use crate::error::UniformError;
use crate::layout::{UniformDecl, UniformDescriptor, UniformType};
use crate::staging::StagingCell;
use crate::table::{DescriptorTable, UniformHandle};

use super::UniformValue;

/// Initialization parameters for a uniform block.
#[derive(Debug, Clone, Default)]
pub struct StagingInit {
    /// Name used in log lines and device buffer labels.
    pub label: Option<String>,
}

/// Per-pipeline uniform state: descriptor table, staging bytes and dirty flag.
///
/// Setters take `&self`. The block is logically unchanged by a write (its
/// layout is frozen); only the staged bytes and the dirty flag move, and those
/// live in a [`StagingCell`]. The block is `!Sync`, so concurrent writers need
/// external serialization.
#[derive(Debug)]
pub struct UniformBlock {
    label: Option<String>,
    table: DescriptorTable,
    pub(crate) staging: StagingCell,
}

impl UniformBlock {
    /// Lays out `decls` and allocates a zeroed, clean staging buffer.
    pub fn new(decls: &[UniformDecl]) -> Self {
        Self::with_init(decls, StagingInit::default())
    }

    pub fn with_init(decls: &[UniformDecl], init: StagingInit) -> Self {
        Self::from_table(DescriptorTable::new(decls), init)
    }

    pub fn from_table(table: DescriptorTable, init: StagingInit) -> Self {
        let staging = StagingCell::new(table.buffer_size());

        log::debug!(
            "uniform block {:?}: {} uniforms, {} bytes",
            init.label.as_deref().unwrap_or("<unnamed>"),
            table.len(),
            table.buffer_size(),
        );

        Self {
            label: init.label,
            table,
            staging,
        }
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn table(&self) -> &DescriptorTable {
        &self.table
    }

    /// Staging buffer size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.buffer_size()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.staging.is_dirty()
    }

    /// Forces the next flush to upload, e.g. after the device buffer was recreated.
    #[inline]
    pub fn mark_dirty(&self) {
        self.staging.mark_dirty();
    }

    /// Writes a single value.
    ///
    /// Same as [`set_array`](Self::set_array) with one element, so it targets
    /// a non-array uniform or element 0 of an array.
    pub fn set<T: UniformValue>(
        &self,
        handle: UniformHandle,
        value: T,
    ) -> Result<(), UniformError> {
        self.set_array(handle, std::slice::from_ref(&value))
    }

    /// Writes `values` starting at element 0 of the uniform.
    ///
    /// Fails without touching the buffer or the dirty flag when the handle is
    /// out of range, `T` does not match the declared type, or `values` is
    /// empty or longer than the declared array.
    pub fn set_array<T: UniformValue>(
        &self,
        handle: UniformHandle,
        values: &[T],
    ) -> Result<(), UniformError> {
        let desc = self.table.get(handle)?;
        check_type(desc, T::TYPE)?;
        check_count(desc, values.len())?;

        self.staging.write(desc.span(), |dst| T::pack(dst, values));
        Ok(())
    }

    /// Copy of the whole staging buffer as it would be uploaded now.
    pub fn staging_bytes(&self) -> Vec<u8> {
        self.staging.snapshot()
    }

    /// Copy of the bytes in one uniform's span, padding included.
    pub fn span_bytes(&self, handle: UniformHandle) -> Result<Vec<u8>, UniformError> {
        let desc = self.table.get(handle)?;
        Ok(self.staging.copy_range(desc.span()))
    }
}

fn check_type(desc: &UniformDescriptor, requested: UniformType) -> Result<(), UniformError> {
    if desc.ty() == requested {
        return Ok(());
    }
    Err(UniformError::TypeMismatch {
        name: desc.name().to_owned(),
        declared: desc.ty(),
        requested,
    })
}

fn check_count(desc: &UniformDescriptor, requested: usize) -> Result<(), UniformError> {
    // a non-array uniform takes exactly one value
    let fits = if desc.is_array() {
        (1..=desc.capacity()).contains(&requested)
    } else {
        requested == 1
    };
    if fits {
        return Ok(());
    }
    Err(UniformError::ArrayBoundsExceeded {
        name: desc.name().to_owned(),
        requested,
        capacity: desc.capacity(),
    })
}
