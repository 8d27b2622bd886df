use super::GpuContext;

/// Tessellated egui output for one frame
pub struct HudFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// Clear to the lighting preset's backdrop and draw the HUD on top.
pub fn render_frame(
    gpu: &GpuContext,
    egui_renderer: &mut egui_wgpu::Renderer,
    clear_color: [f64; 3],
    hud: &HudFrame,
) -> Result<(), wgpu::SurfaceError> {
    let output = gpu.surface.get_current_texture()?;
    let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let screen_descriptor = egui_wgpu::ScreenDescriptor {
        size_in_pixels: [gpu.config.width, gpu.config.height],
        pixels_per_point: hud.pixels_per_point,
    };

    let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("render_encoder"),
    });

    // Upload egui textures
    for (id, image_delta) in &hud.textures_delta.set {
        egui_renderer.update_texture(&gpu.device, &gpu.queue, *id, image_delta);
    }
    let hud_commands = egui_renderer.update_buffers(
        &gpu.device,
        &gpu.queue,
        &mut encoder,
        &hud.primitives,
        &screen_descriptor,
    );

    {
        let [r, g, b] = clear_color;
        let hud_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hud_render_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a: 1.0 }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        egui_renderer.render(&mut hud_pass.forget_lifetime(), &hud.primitives, &screen_descriptor);
    }

    // Cleanup egui textures
    for id in &hud.textures_delta.free {
        egui_renderer.free_texture(id);
    }

    gpu.queue
        .submit(hud_commands.into_iter().chain(std::iter::once(encoder.finish())));
    output.present();

    Ok(())
}
