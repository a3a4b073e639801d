use anyhow::{Context, Result};

/// Initialization parameters for the headless device.
#[derive(Debug, Clone)]
pub struct HeadlessInit {
    /// Adapter power preference.
    pub power_preference: wgpu::PowerPreference,

    /// Force a software adapter (e.g. on CI machines without a GPU).
    pub force_fallback_adapter: bool,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,
}

impl Default for HeadlessInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: false,
            required_limits: wgpu::Limits::downlevel_defaults(),
        }
    }
}

/// Device + queue without a surface.
pub struct HeadlessGpu {
    device: wgpu::Device,
    queue: wgpu::Queue,
    adapter_info: wgpu::AdapterInfo,
}

impl HeadlessGpu {
    /// Acquires an adapter and device. Acquisition is asynchronous under wgpu.
    pub async fn new(init: HeadlessInit) -> Result<Self> {
        let HeadlessInit {
            power_preference,
            force_fallback_adapter,
            required_limits,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: None,
                force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("unistage-probe device"),
                required_features: wgpu::Features::empty(),
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(Self {
            device,
            queue,
            adapter_info: adapter.get_info(),
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn adapter_info(&self) -> &wgpu::AdapterInfo {
        &self.adapter_info
    }
}
