use crate::error::UniformError;
use crate::layout::{UniformDecl, UniformDescriptor, UniformLayout, compute_layout};

use super::UniformHandle;

/// Immutable table of uniform descriptors, built once per pipeline.
///
/// The table is the arena; [`UniformHandle`] is the index into it. Descriptors
/// keep the order of the declarations they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorTable {
    descriptors: Vec<UniformDescriptor>,
    buffer_size: usize,
}

impl DescriptorTable {
    /// Lays out `decls` and freezes the result.
    pub fn new(decls: &[UniformDecl]) -> Self {
        Self::from_layout(compute_layout(decls))
    }

    pub fn from_layout(layout: UniformLayout) -> Self {
        Self {
            descriptors: layout.descriptors,
            buffer_size: layout.size,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Size in bytes of the staging buffer this table describes.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Resolves a handle, failing with `InvalidHandle` when it is out of range.
    pub fn get(&self, handle: UniformHandle) -> Result<&UniformDescriptor, UniformError> {
        self.descriptors
            .get(handle.index() as usize)
            .ok_or(UniformError::InvalidHandle {
                index: handle.index(),
                len: self.descriptors.len(),
            })
    }

    /// Finds the handle of the first uniform declared as `name`.
    pub fn handle_by_name(&self, name: &str) -> Option<UniformHandle> {
        self.descriptors
            .iter()
            .position(|d| d.name() == name)
            .map(|i| UniformHandle::from_index(i as u32))
    }

    /// Iterates `(handle, descriptor)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (UniformHandle, &UniformDescriptor)> {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (UniformHandle::from_index(i as u32), d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::UniformType;

    fn table() -> DescriptorTable {
        DescriptorTable::new(&[
            UniformDecl::new("u_color", UniformType::Float4),
            UniformDecl::array("u_offsets", UniformType::Float2, 3),
            UniformDecl::new("u_mvp", UniformType::Float4x4),
        ])
    }

    #[test]
    fn handles_are_dense_in_declaration_order() {
        let t = table();
        let handles: Vec<u32> = t.iter().map(|(h, _)| h.index()).collect();
        assert_eq!(handles, vec![0, 1, 2]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn get_resolves_descriptor() {
        let t = table();
        let d = t.get(UniformHandle::from_index(1)).unwrap();
        assert_eq!(d.name(), "u_offsets");
        assert_eq!(d.offset(), 16);
        assert_eq!(d.capacity(), 3);
    }

    #[test]
    fn get_out_of_range_is_invalid_handle() {
        let err = table().get(UniformHandle::from_index(3)).unwrap_err();
        assert_eq!(err, UniformError::InvalidHandle { index: 3, len: 3 });
    }

    #[test]
    fn lookup_by_name() {
        let t = table();
        assert_eq!(t.handle_by_name("u_mvp"), Some(UniformHandle::from_index(2)));
        assert_eq!(t.handle_by_name("u_missing"), None);
    }

    #[test]
    fn buffer_size_comes_from_layout() {
        // 16 (float4) + 48 (3 padded float2) + 64 (float4x4)
        assert_eq!(table().buffer_size(), 128);
    }

    #[test]
    fn same_declarations_give_identical_tables() {
        assert_eq!(table(), table());
    }
}
