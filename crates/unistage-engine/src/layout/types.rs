use std::fmt;

/// Geometric shape of one uniform element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl ShapeKind {
    /// Number of 4-byte components in one vector, or in one column of a matrix.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            ShapeKind::Scalar => 1,
            ShapeKind::Vec2 | ShapeKind::Mat2 => 2,
            ShapeKind::Vec3 | ShapeKind::Mat3 => 3,
            ShapeKind::Vec4 | ShapeKind::Mat4 => 4,
        }
    }

    /// Number of columns; 1 for scalars and vectors.
    #[inline]
    pub const fn columns(self) -> usize {
        match self {
            ShapeKind::Mat2 => 2,
            ShapeKind::Mat3 => 3,
            ShapeKind::Mat4 => 4,
            _ => 1,
        }
    }

    #[inline]
    pub const fn is_matrix(self) -> bool {
        matches!(self, ShapeKind::Mat2 | ShapeKind::Mat3 | ShapeKind::Mat4)
    }
}

/// Component type of a uniform. Both are 32 bits wide in the staging buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ElementType {
    Int,
    Float,
}

/// A valid (shape, element type) pair.
///
/// Integer matrices have no variant; they cannot be declared or written.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UniformType {
    Int,
    Int2,
    Int3,
    Int4,
    Float,
    Float2,
    Float3,
    Float4,
    Float2x2,
    Float3x3,
    Float4x4,
}

impl UniformType {
    pub const fn shape(self) -> ShapeKind {
        match self {
            UniformType::Int | UniformType::Float => ShapeKind::Scalar,
            UniformType::Int2 | UniformType::Float2 => ShapeKind::Vec2,
            UniformType::Int3 | UniformType::Float3 => ShapeKind::Vec3,
            UniformType::Int4 | UniformType::Float4 => ShapeKind::Vec4,
            UniformType::Float2x2 => ShapeKind::Mat2,
            UniformType::Float3x3 => ShapeKind::Mat3,
            UniformType::Float4x4 => ShapeKind::Mat4,
        }
    }

    pub const fn element(self) -> ElementType {
        match self {
            UniformType::Int | UniformType::Int2 | UniformType::Int3 | UniformType::Int4 => {
                ElementType::Int
            }
            _ => ElementType::Float,
        }
    }

    /// Shader-facing spelling, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            UniformType::Int => "int",
            UniformType::Int2 => "int2",
            UniformType::Int3 => "int3",
            UniformType::Int4 => "int4",
            UniformType::Float => "float",
            UniformType::Float2 => "float2",
            UniformType::Float3 => "float3",
            UniformType::Float4 => "float4",
            UniformType::Float2x2 => "float2x2",
            UniformType::Float3x3 => "float3x3",
            UniformType::Float4x4 => "float4x4",
        }
    }
}

impl fmt::Display for UniformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One uniform as handed over by shader reflection.
///
/// `name` is carried for diagnostics and lookup only; it never affects layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformDecl {
    pub name: String,
    pub ty: UniformType,
    /// 0 or 1 means "not an array".
    pub array_count: u32,
}

impl UniformDecl {
    /// Declares a non-array uniform.
    pub fn new(name: impl Into<String>, ty: UniformType) -> Self {
        Self { name: name.into(), ty, array_count: 0 }
    }

    /// Declares an array uniform of `count` elements.
    pub fn array(name: impl Into<String>, ty: UniformType, count: u32) -> Self {
        Self { name: name.into(), ty, array_count: count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [UniformType; 11] = [
        UniformType::Int,
        UniformType::Int2,
        UniformType::Int3,
        UniformType::Int4,
        UniformType::Float,
        UniformType::Float2,
        UniformType::Float3,
        UniformType::Float4,
        UniformType::Float2x2,
        UniformType::Float3x3,
        UniformType::Float4x4,
    ];

    #[test]
    fn matrices_are_float_only() {
        for ty in ALL.into_iter().filter(|ty| ty.shape().is_matrix()) {
            assert_eq!(ty.element(), ElementType::Float);
        }
    }

    #[test]
    fn names_pad_in_tables() {
        assert_eq!(format!("{:<8}|", UniformType::Int3), "int3    |");
    }

    #[test]
    fn matrix_columns_match_components() {
        assert_eq!(ShapeKind::Mat3.columns(), 3);
        assert_eq!(ShapeKind::Mat3.components(), 3);
        assert_eq!(ShapeKind::Vec3.columns(), 1);
    }
}
