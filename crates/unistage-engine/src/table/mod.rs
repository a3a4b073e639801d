//! Descriptor table: the arena of laid-out uniforms and its dense handles.

mod arena;
mod handle;

pub use arena::DescriptorTable;
pub use handle::UniformHandle;
