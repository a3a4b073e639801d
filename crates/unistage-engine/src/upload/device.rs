use crate::error::UploadError;
use crate::layout::SLOT_SIZE;
use crate::uniforms::UniformBlock;

use super::UploadTarget;

/// Uploads through `wgpu::Queue::write_buffer`.
///
/// The buffer needs `COPY_DST` usage and at least the block's size.
pub struct WgpuUploadTarget<'a> {
    pub queue: &'a wgpu::Queue,
    pub buffer: &'a wgpu::Buffer,
}

impl<'a> WgpuUploadTarget<'a> {
    #[inline]
    pub fn new(queue: &'a wgpu::Queue, buffer: &'a wgpu::Buffer) -> Self {
        Self { queue, buffer }
    }
}

impl UploadTarget for WgpuUploadTarget<'_> {
    fn update_data(&mut self, bytes: &[u8]) -> Result<(), UploadError> {
        if bytes.is_empty() {
            return Ok(());
        }
        check_upload(bytes.len() as u64, self.buffer.size())?;
        self.queue.write_buffer(self.buffer, 0, bytes);
        Ok(())
    }
}

/// Allocates a `UNIFORM | COPY_DST` buffer sized for `block`.
///
/// wgpu rejects zero-sized uniform bindings, so an empty block still gets one slot.
pub fn create_uniform_buffer(device: &wgpu::Device, block: &UniformBlock) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(block.label().unwrap_or("unistage uniform buffer")),
        size: block.size().max(SLOT_SIZE) as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn check_upload(len: u64, capacity: u64) -> Result<(), UploadError> {
    if len > capacity {
        return Err(UploadError::BufferTooSmall { len, capacity });
    }
    if len % wgpu::COPY_BUFFER_ALIGNMENT != 0 {
        return Err(UploadError::Misaligned {
            len,
            alignment: wgpu::COPY_BUFFER_ALIGNMENT,
        });
    }
    Ok(())
}
