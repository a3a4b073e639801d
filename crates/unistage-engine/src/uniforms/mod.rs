//! Typed setter API.
//!
//! Values are written through [`UniformBlock::set`] and
//! [`UniformBlock::set_array`]; the value's Rust type selects the uniform type
//! it may target and the packing used:
//!
//! - arrayed scalars/vectors: one 16-byte slot per element
//! - non-array scalars/vectors: natural width
//! - matrices: column-major, one 16-byte slot per column

mod block;
mod value;

pub use block::{StagingInit, UniformBlock};
pub use value::UniformValue;
