use std::ops::Range;

use super::{ShapeKind, UniformDecl, UniformType};

/// Size of one padded element slot (4 components x 4 bytes).
pub const SLOT_SIZE: usize = 16;

/// Size of one scalar component.
pub const COMPONENT_SIZE: usize = 4;

/// A uniform with its byte offset fixed inside the staging buffer.
///
/// Offsets are assigned once by [`compute_layout`] and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformDescriptor {
    name: String,
    ty: UniformType,
    array_count: u32,
    offset: usize,
}

impl UniformDescriptor {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ty(&self) -> UniformType {
        self.ty
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.ty.shape()
    }

    /// Declared array count; 0 or 1 means "not an array".
    #[inline]
    pub fn array_count(&self) -> u32 {
        self.array_count
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.array_count > 1
    }

    /// Maximum number of elements one write may cover.
    #[inline]
    pub fn capacity(&self) -> usize {
        if self.is_array() {
            self.array_count as usize
        } else {
            1
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn size(&self) -> usize {
        span_size(self.ty, self.array_count)
    }

    /// Byte range setters may write: `[offset, offset + size)`.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.size()
    }
}

/// Output of [`compute_layout`]: descriptors in declaration order plus the
/// total staging size (tail padding included).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UniformLayout {
    pub(crate) descriptors: Vec<UniformDescriptor>,
    pub(crate) size: usize,
}

impl UniformLayout {
    #[inline]
    pub fn descriptors(&self) -> &[UniformDescriptor] {
        &self.descriptors
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Assigns byte offsets to `decls`, preserving their order.
///
/// Rules:
/// - non-array scalars/vectors take their natural width (4/8/12/16 bytes)
/// - arrayed scalars/vectors take one 16-byte slot per element
/// - an NxN matrix takes N slots (one per column); arrays repeat that back to back
/// - each offset is rounded up to the std140 base alignment of its member
/// - the total is rounded up to a whole slot
///
/// The function is pure: the same input always yields the same layout.
pub fn compute_layout(decls: &[UniformDecl]) -> UniformLayout {
    let mut cursor = 0usize;
    let mut descriptors = Vec::with_capacity(decls.len());

    for decl in decls {
        let offset = cursor.next_multiple_of(base_alignment(decl.ty, decl.array_count));
        cursor = offset + span_size(decl.ty, decl.array_count);

        descriptors.push(UniformDescriptor {
            name: decl.name.clone(),
            ty: decl.ty,
            array_count: decl.array_count,
            offset,
        });
    }

    UniformLayout {
        descriptors,
        size: cursor.next_multiple_of(SLOT_SIZE),
    }
}

/// Bytes covered by one uniform.
pub fn span_size(ty: UniformType, array_count: u32) -> usize {
    let shape = ty.shape();
    let count = array_count.max(1) as usize;

    if shape.is_matrix() {
        count * shape.columns() * SLOT_SIZE
    } else if array_count > 1 {
        count * SLOT_SIZE
    } else {
        shape.components() * COMPONENT_SIZE
    }
}

fn base_alignment(ty: UniformType, array_count: u32) -> usize {
    let shape = ty.shape();
    if shape.is_matrix() || array_count > 1 {
        return SLOT_SIZE;
    }
    match shape.components() {
        1 => COMPONENT_SIZE,
        2 => 2 * COMPONENT_SIZE,
        // vec3 aligns like vec4
        _ => SLOT_SIZE,
    }
}
