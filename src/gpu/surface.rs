//! Presentable render surface for one embedded visualizer.
//!
//! Owns the swap-chain (wgpu surface + configuration), the bar pipeline, and
//! the per-frame render path: clear to transparent, upload the regenerated
//! mesh, draw, present with vsync.

use super::context::{GpuContext, GpuError};
use super::pipeline::BarPipeline;
use crate::bars::BAR_COUNT;
use crate::geometry::{self, VERTEX_COUNT};
use wgpu::{Surface, SurfaceConfiguration};

/// GPU-side state for one visualizer surface.
///
/// The lifecycle is expressed through ownership: while `surface` is present
/// the visualizer is renderable; after a fatal surface error it is dropped
/// and every subsequent [`render_frame`](Self::render_frame) is a no-op.
/// Dropping the whole struct releases the remaining device resources in
/// dependency order.
pub struct RenderSurface {
    pipeline: BarPipeline,
    surface: Option<Surface<'static>>,
    config: SurfaceConfiguration,
    // Declared last: the device must outlive everything created from it.
    ctx: GpuContext,
}

impl RenderSurface {
    /// Create a surface over the given target and size it to (width, height).
    ///
    /// Any failure returns an error and releases everything created so far;
    /// no partial resource set survives.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the window behind `target` is valid and
    /// outlives this surface.
    pub async unsafe fn new(
        target: wgpu::SurfaceTargetUnsafe,
        width: u32,
        height: u32,
    ) -> Result<Self, GpuError> {
        let instance = GpuContext::create_instance();
        let surface = unsafe { instance.create_surface_unsafe(target)? };
        let ctx = GpuContext::new(instance, Some(&surface)).await?;

        let caps = surface.get_capabilities(&ctx.adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(GpuError::NoSurfaceFormat)?;
        // Premultiplied alpha lets the transparent clear composite over the
        // host window's own content.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            wgpu::CompositeAlphaMode::Auto
        };

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&ctx.device, &config);

        let pipeline = BarPipeline::new(&ctx.device, format);

        log::info!(
            "render surface initialized: {}x{} ({:?})",
            config.width,
            config.height,
            format
        );

        Ok(Self {
            pipeline,
            surface: Some(surface),
            config,
            ctx,
        })
    }

    /// Resize the swap-chain to the new client-area size.
    ///
    /// Zero dimensions (minimized window) are ignored. Reconfiguration is
    /// synchronous; the next frame observes the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(surface) = &self.surface {
            self.config.width = width;
            self.config.height = height;
            surface.configure(&self.ctx.device, &self.config);
            log::debug!("render surface resized to {}x{}", width, height);
        }
    }

    /// Render one frame from the given bar levels.
    ///
    /// No-ops when the surface is absent (never initialized, degraded, or
    /// torn down) and when acquisition fails mid-resize. Presentation uses
    /// vsync, which is the system's only frame pacing.
    pub fn render_frame(&mut self, values: &[f32; BAR_COUNT]) {
        let Some(surface) = self.surface.take() else {
            return;
        };

        let frame = match surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Stale swap-chain (mid-resize or display change); reconfigure
                // and let the next frame pick it up.
                surface.configure(&self.ctx.device, &self.config);
                self.surface = Some(surface);
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface acquire timed out, skipping frame");
                self.surface = Some(surface);
                return;
            }
            Err(err) => {
                // Device loss or memory exhaustion. No recovery is attempted;
                // the surface is dropped and later renders no-op.
                log::error!("surface unusable, rendering disabled: {err}");
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let vertices = geometry::generate_bar_vertices(values);
        self.ctx.queue.write_buffer(
            &self.pipeline.vertex_buffer,
            0,
            bytemuck::cast_slice(&vertices),
        );

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("bars_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("bars_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        // Transparent clear so the bars composite over the
                        // host's own content.
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_vertex_buffer(0, self.pipeline.vertex_buffer.slice(..));
            render_pass.set_viewport(
                0.0,
                0.0,
                self.config.width as f32,
                self.config.height as f32,
                0.0,
                1.0,
            );
            render_pass.draw(0..VERTEX_COUNT as u32, 0..1);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        self.surface = Some(surface);
    }

    /// Current swap-chain dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Whether the surface can currently present frames.
    pub fn is_presentable(&self) -> bool {
        self.surface.is_some()
    }

    /// Get GPU adapter info.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.ctx.adapter_info()
    }
}
