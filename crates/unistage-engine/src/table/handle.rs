/// Opaque, dense, zero-based index into a [`DescriptorTable`](super::DescriptorTable).
///
/// Handles are assigned in declaration order and stay valid for the lifetime
/// of the table. A handle carries no pointer; using it against a different
/// table is a caller error that is caught only when the index is out of range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UniformHandle(u32);

impl UniformHandle {
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}
