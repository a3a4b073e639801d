//! Uniform type model and the layout calculator.
//!
//! Layout is a pure function from an ordered declaration list to byte offsets.
//! Re-running it with the same list reproduces the same offsets, which is what
//! keeps externally held handles valid.

mod calc;
mod types;

pub use calc::{
    COMPONENT_SIZE, SLOT_SIZE, UniformDescriptor, UniformLayout, compute_layout, span_size,
};
pub use types::{ElementType, ShapeKind, UniformDecl, UniformType};
