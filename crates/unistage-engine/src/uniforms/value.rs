use bytemuck::Pod;

use crate::layout::{COMPONENT_SIZE, SLOT_SIZE, UniformType};

mod sealed {
    pub trait Sealed {}
}

/// A Rust value type that can be written to a uniform.
///
/// Each implementor maps to exactly one [`UniformType`]:
///
/// | Rust type | Uniform type |
/// |-----------|--------------|
/// | `i32`, `[i32; 2..=4]` | `Int` .. `Int4` |
/// | `f32`, `[f32; 2..=4]` | `Float` .. `Float4` |
/// | `[[f32; N]; N]` for N = 2, 3, 4 | `Float2x2` .. `Float4x4` (column-major, outer index = column) |
///
/// The trait is sealed; the packing rules live with the implementations.
pub trait UniformValue: Copy + sealed::Sealed {
    const TYPE: UniformType;

    /// Writes `values` from the start of `dst`, leaving padding bytes untouched.
    ///
    /// `dst` is the descriptor's span; the caller has already checked the count.
    #[doc(hidden)]
    fn pack(dst: &mut [u8], values: &[Self]);
}

macro_rules! vector_value {
    ($($ty:ty => $uniform:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl UniformValue for $ty {
            const TYPE: UniformType = UniformType::$uniform;

            #[inline]
            fn pack(dst: &mut [u8], values: &[Self]) {
                pack_vectors(dst, values);
            }
        }
    )*};
}

vector_value! {
    i32 => Int,
    [i32; 2] => Int2,
    [i32; 3] => Int3,
    [i32; 4] => Int4,
    f32 => Float,
    [f32; 2] => Float2,
    [f32; 3] => Float3,
    [f32; 4] => Float4,
}

macro_rules! matrix_value {
    ($($n:literal => $uniform:ident),* $(,)?) => {$(
        impl sealed::Sealed for [[f32; $n]; $n] {}

        impl UniformValue for [[f32; $n]; $n] {
            const TYPE: UniformType = UniformType::$uniform;

            #[inline]
            fn pack(dst: &mut [u8], values: &[Self]) {
                pack_matrices::<$n>(dst, values);
            }
        }
    )*};
}

matrix_value! {
    2 => Float2x2,
    3 => Float3x3,
    4 => Float4x4,
}

/// Element `i` lands at `i * SLOT_SIZE`; only the value's own width is copied.
///
/// A lone non-array value gets a span of its natural width, which the first
/// (possibly short) chunk covers exactly.
fn pack_vectors<V: Pod>(dst: &mut [u8], values: &[V]) {
    let width = size_of::<V>();

    if width == SLOT_SIZE {
        // vec4: elements already fill their slots
        let src: &[u8] = bytemuck::cast_slice(values);
        dst[..src.len()].copy_from_slice(src);
        return;
    }

    for (slot, value) in dst.chunks_mut(SLOT_SIZE).zip(values) {
        slot[..width].copy_from_slice(bytemuck::bytes_of(value));
    }
}

/// Column-major NxN matrices, one 16-byte slot per column, matrices back to back.
///
/// For `N == 4` every column fills its slot, so the whole run is one copy.
pub(crate) fn pack_matrices<const N: usize>(dst: &mut [u8], matrices: &[[[f32; N]; N]]) {
    if N == 4 {
        let src: &[u8] = bytemuck::cast_slice(matrices.as_flattened().as_flattened());
        dst[..src.len()].copy_from_slice(src);
        return;
    }

    let column_bytes = N * COMPONENT_SIZE;
    for (slot, column) in dst.chunks_mut(SLOT_SIZE).zip(matrices.iter().flatten()) {
        slot[..column_bytes].copy_from_slice(bytemuck::cast_slice(column.as_slice()));
    }
}
