//! Headless smoke run: lays out a uniform block, writes it and pushes it to a
//! real wgpu buffer, checking the flush outcomes along the way.

mod gpu;

use anyhow::{Context, Result};
use unistage_engine::layout::{UniformDecl, UniformType};
use unistage_engine::logging::{LoggingConfig, init_logging};
use unistage_engine::uniforms::{StagingInit, UniformBlock};
use unistage_engine::upload::{WgpuUploadTarget, create_uniform_buffer};
use unistage_engine::FlushOutcome;

use gpu::{HeadlessGpu, HeadlessInit};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    pollster::block_on(run())
}

async fn run() -> Result<()> {
    let gpu = HeadlessGpu::new(HeadlessInit::default()).await?;
    let info = gpu.adapter_info();
    log::info!("adapter: {} ({:?})", info.name, info.backend);

    let block = UniformBlock::with_init(
        &[
            UniformDecl::new("u_viewport", UniformType::Float2),
            UniformDecl::new("u_frame", UniformType::Int),
            UniformDecl::new("u_tint", UniformType::Float4),
            UniformDecl::array("u_kernel", UniformType::Float, 5),
            UniformDecl::new("u_normal", UniformType::Float3x3),
            UniformDecl::new("u_mvp", UniformType::Float4x4),
        ],
        StagingInit { label: Some("probe uniforms".into()) },
    );

    for (handle, desc) in block.table().iter() {
        log::info!(
            "  #{} {:<10} {:<8} x{} @ {:>3}..{:<3}",
            handle.index(),
            desc.name(),
            desc.ty(),
            desc.capacity(),
            desc.span().start,
            desc.span().end,
        );
    }
    log::info!("block size: {} bytes", block.size());

    let table = block.table();
    let handle = |name: &str| {
        table
            .handle_by_name(name)
            .with_context(|| format!("uniform `{name}` missing from layout"))
    };

    let buffer = create_uniform_buffer(gpu.device(), &block);
    let mut target = WgpuUploadTarget::new(gpu.queue(), &buffer);

    anyhow::ensure!(
        block.flush(&mut target)? == FlushOutcome::Skipped,
        "fresh block should not upload"
    );

    block.set(handle("u_viewport")?, [1280.0f32, 720.0])?;
    block.set(handle("u_frame")?, 1i32)?;
    block.set(handle("u_tint")?, [1.0f32, 0.5, 0.25, 1.0])?;
    block.set_array(handle("u_kernel")?, &[0.06f32, 0.24, 0.4, 0.24, 0.06])?;
    block.set(handle("u_normal")?, [[1.0f32, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])?;
    block.set(
        handle("u_mvp")?,
        [
            [1.0f32, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    )?;

    // A mismatched write is reported and leaves the block as it was.
    if let Err(err) = block.set(handle("u_mvp")?, 0.0f32) {
        log::info!("rejected as expected: {err}");
    }

    let outcome = block.flush(&mut target)?;
    anyhow::ensure!(outcome.was_updated(), "dirty block should upload");
    anyhow::ensure!(
        block.flush(&mut target)? == FlushOutcome::Skipped,
        "clean block should not upload twice"
    );

    gpu.queue().submit(std::iter::empty());
    log::info!("probe finished: {} bytes staged and uploaded", block.size());
    Ok(())
}
