//! GPU integration tests.
//!
//! These need a working adapter; on machines without one they log and skip
//! rather than fail.

use etmp_visualizer::{generate_bar_vertices, BarPipeline, GpuContext, BAR_COUNT, VERTEX_COUNT};

async fn context() -> Option<GpuContext> {
    match GpuContext::new(GpuContext::create_instance(), None).await {
        Ok(ctx) => Some(ctx),
        Err(err) => {
            eprintln!("skipping GPU test, no usable adapter: {err}");
            None
        }
    }
}

#[tokio::test]
async fn test_pipeline_builds_against_common_surface_formats() {
    let Some(ctx) = context().await else { return };

    for format in [
        wgpu::TextureFormat::Bgra8Unorm,
        wgpu::TextureFormat::Rgba8Unorm,
    ] {
        let _ = BarPipeline::new(&ctx.device, format);
    }
}

#[tokio::test]
async fn test_offscreen_frame_renders_and_completes() {
    let Some(ctx) = context().await else { return };

    let format = wgpu::TextureFormat::Rgba8Unorm;
    let pipeline = BarPipeline::new(&ctx.device, format);

    let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("offscreen_target"),
        size: wgpu::Extent3d {
            width: 256,
            height: 64,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    let vertices = generate_bar_vertices(&[0.6; BAR_COUNT]);
    ctx.queue
        .write_buffer(&pipeline.vertex_buffer, 0, bytemuck::cast_slice(&vertices));

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("offscreen_encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("offscreen_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
        pass.set_pipeline(&pipeline.pipeline);
        pass.set_vertex_buffer(0, pipeline.vertex_buffer.slice(..));
        pass.draw(0..VERTEX_COUNT as u32, 0..1);
    }

    ctx.queue.submit(std::iter::once(encoder.finish()));
    ctx.device
        .poll(wgpu::PollType::wait_indefinitely())
        .expect("queue should drain");
}
