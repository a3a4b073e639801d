//! Unistage engine crate.
//!
//! This crate owns the CPU side of shader uniform blocks: the byte layout of a
//! block, the staging copy that typed setters write into, and the dirty flag
//! that decides when the staging copy is pushed to a device buffer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`layout`] | `UniformType`, `UniformDecl`, `UniformDescriptor`, `compute_layout` |
//! | [`table`] | `UniformHandle`, `DescriptorTable` |
//! | [`staging`] | `StagingBuffer`, `StagingCell` |
//! | [`uniforms`] | `UniformBlock`, `UniformValue` |
//! | [`upload`] | `UploadTarget`, `FlushOutcome`, wgpu adapter |
//! | [`error`] | `UniformError`, `UploadError` |
//!
//! # Quick start
//!
//! ```rust
//! use unistage_engine::layout::{UniformDecl, UniformType};
//! use unistage_engine::uniforms::UniformBlock;
//!
//! let block = UniformBlock::new(&[
//!     UniformDecl::new("u_viewport", UniformType::Float2),
//!     UniformDecl::array("u_weights", UniformType::Float, 4),
//! ]);
//!
//! let viewport = block.table().handle_by_name("u_viewport").unwrap();
//! block.set(viewport, [1280.0f32, 720.0]).unwrap();
//! assert!(block.is_dirty());
//! ```

pub mod error;
pub mod layout;
pub mod logging;
pub mod staging;
pub mod table;
pub mod uniforms;
pub mod upload;

pub use error::{UniformError, UploadError};
pub use layout::{UniformDecl, UniformType};
pub use table::UniformHandle;
pub use uniforms::UniformBlock;
pub use upload::{FlushOutcome, UploadTarget};
