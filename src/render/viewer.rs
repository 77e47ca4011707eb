//! Windowed carousel viewer: a winit event loop driving the carousel state
//! machine and a wgpu renderer for the slide stack and its controls.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossbeam_channel as xchan;
use tracing::{error, info, warn};
use wgpu::SurfaceError;
use wgpu::util::DeviceExt;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    carousel::Carousel,
    config::Configuration,
    events::{ControlAction, NavDirection},
    gesture::DragGesture,
    render::loader::{LoaderMsg, PreparedImage, spawn_loader},
    render::overlay::{ControlLayout, OverlayVertex},
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SlideVertex {
    pos: [f32; 2],
    uv: [f32; 2],
}

const QUAD: [SlideVertex; 4] = [
    SlideVertex {
        pos: [-1.0, -1.0],
        uv: [0.0, 1.0],
    },
    SlideVertex {
        pos: [1.0, -1.0],
        uv: [1.0, 1.0],
    },
    SlideVertex {
        pos: [-1.0, 1.0],
        uv: [0.0, 0.0],
    },
    SlideVertex {
        pos: [1.0, 1.0],
        uv: [1.0, 0.0],
    },
];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SlideParams {
    scale: [f32; 2],
    offset: [f32; 2],
}

struct Tex {
    view: wgpu::TextureView,
    w: u32,
    h: u32,
}

struct SlideSlot {
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    tex: Tex,
}

struct Gpu {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    device: wgpu::Device,
    queue: wgpu::Queue,
    slide_pipeline: wgpu::RenderPipeline,
    overlay_pipeline: wgpu::RenderPipeline,
    bind_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    vbuf: wgpu::Buffer,
    slots: Vec<SlideSlot>,
    layout: ControlLayout,
}

impl Gpu {
    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.layout = ControlLayout::compute(self.config.width, self.config.height, self.slots.len());
    }

    /// Swaps a decoded image into its slide slot and repoints the bind
    /// group at the new texture view.
    fn install_slide(&mut self, prepared: PreparedImage) {
        let Some(slot) = self.slots.get_mut(prepared.slide) else {
            warn!(slide = prepared.slide, "decoded image for unknown slide");
            return;
        };
        slot.tex = upload_texture(
            &self.device,
            &self.queue,
            &prepared.pixels,
            prepared.width,
            prepared.height,
        );
        slot.bind_group = make_bind_group(
            &self.device,
            &self.bind_layout,
            &slot.tex.view,
            &self.sampler,
            &slot.uniform,
        );
        info!(slide = prepared.slide, path = %prepared.path.display(), "slide ready");
    }
}

struct App {
    cfg: Configuration,
    carousel: Carousel,
    gesture: Option<DragGesture>,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    cursor: PhysicalPosition<f64>,
    pending_redraw: bool,
    tx_req: xchan::Sender<LoaderMsg>,
    rx_res: xchan::Receiver<PreparedImage>,
}

/// Runs the carousel in a window until it is closed. Blocks the calling
/// thread for the lifetime of the event loop.
pub fn run_windowed(cfg: Configuration) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to build viewer event loop")?;

    let (tx_req, rx_req) = xchan::unbounded::<LoaderMsg>();
    let (tx_res, rx_res) = xchan::unbounded::<PreparedImage>();
    spawn_loader(rx_req, tx_res);

    let carousel = Carousel::new(cfg.images.len(), cfg.interval, Instant::now());
    let gesture = cfg
        .drag
        .enabled
        .then(|| DragGesture::new(cfg.drag.threshold_px));

    let mut app = App {
        cfg,
        carousel,
        gesture,
        window: None,
        gpu: None,
        cursor: PhysicalPosition::new(0.0, 0.0),
        pending_redraw: false,
        tx_req,
        rx_res,
    };
    let run_result = event_loop.run_app(&mut app);
    let _ = app.tx_req.send(LoaderMsg::Quit);
    run_result.context("viewer event loop failed")
}

impl App {
    fn request_redraw(&mut self) {
        self.pending_redraw = true;
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn dispatch(&mut self, action: ControlAction) {
        let now = Instant::now();
        match action {
            ControlAction::Nav(NavDirection::Next) => self.carousel.next(now),
            ControlAction::Nav(NavDirection::Prev) => self.carousel.prev(now),
            ControlAction::GoTo(index) => {
                if let Err(err) = self.carousel.go_to(index, now) {
                    warn!("ignoring navigation: {err}");
                }
            }
            ControlAction::TogglePlayPause => self.carousel.toggle_play_pause(now),
        }
        self.request_redraw();
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.carousel.dispose();
        let _ = self.tx_req.send(LoaderMsg::Quit);
        event_loop.exit();
    }

    fn init_gpu(&mut self, window: Arc<Window>) -> Result<()> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("failed to acquire GPU adapter")?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|fmt| fmt.is_srgb())
            .unwrap_or(caps.formats[0]);

        let limits = adapter.limits();
        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("carousel-device"),
            required_features: wgpu::Features::empty(),
            required_limits: limits,
            memory_hints: wgpu::MemoryHints::default(),
            trace: wgpu::Trace::default(),
        }))
        .context("failed to acquire GPU device")?;

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        info!(
            width = config.width,
            height = config.height,
            format = ?config.format,
            "viewer surface configured",
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("carousel-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/carousel.wgsl").into()),
        });

        let bind_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("slide-bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("slide-pipeline-layout"),
            bind_group_layouts: &[&bind_layout],
            push_constant_ranges: &[],
        });

        let slide_vlayout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SlideVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2],
        };

        let slide_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("slide-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_slide"),
                buffers: &[slide_vlayout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_slide"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let overlay_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("overlay-pipeline-layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let overlay_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("overlay-pipeline"),
            layout: Some(&overlay_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_overlay"),
                buffers: &[OverlayVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_overlay"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("slide-sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let vbuf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("slide-quad"),
            contents: bytemuck::cast_slice(&QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // One slot per slide, all starting as a black placeholder until the
        // loader delivers the decoded image.
        let slots = (0..self.cfg.images.len())
            .map(|i| {
                let tex = upload_texture(&device, &queue, &[0, 0, 0, 255], 1, 1);
                let uniform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("slide-params-{i}")),
                    contents: bytemuck::bytes_of(&SlideParams {
                        scale: [1.0, 1.0],
                        offset: [0.0, 0.0],
                    }),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = make_bind_group(&device, &bind_layout, &tex.view, &sampler, &uniform);
                SlideSlot {
                    uniform,
                    bind_group,
                    tex,
                }
            })
            .collect::<Vec<_>>();

        let layout = ControlLayout::compute(config.width, config.height, slots.len());

        self.gpu = Some(Gpu {
            surface,
            config,
            device,
            queue,
            slide_pipeline,
            overlay_pipeline,
            bind_layout,
            sampler,
            vbuf,
            slots,
            layout,
        });

        for (i, path) in self.cfg.images.iter().enumerate() {
            let _ = self.tx_req.send(LoaderMsg::Decode {
                slide: i,
                path: path.clone(),
            });
        }

        Ok(())
    }

    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_mut() else { return };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let frame_model = self.carousel.frame();

        let surface_frame = match gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(SurfaceError::Outdated) | Err(SurfaceError::Lost) => {
                info!("viewer surface lost; reconfiguring");
                let size = window.inner_size();
                gpu.resize(size.width, size.height);
                return;
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("viewer surface out of memory; exiting event loop");
                event_loop.exit();
                return;
            }
            Err(SurfaceError::Timeout) => {
                warn!("viewer surface acquisition timed out");
                return;
            }
            Err(SurfaceError::Other) => {
                warn!("viewer surface reported an unknown error; retrying");
                return;
            }
        };

        // Offsets come from the render model in percent of container width;
        // NDC spans 2 units, so 100% = 2.0.
        for (slot, offset) in gpu.slots.iter().zip(&frame_model.offsets) {
            let params = SlideParams {
                scale: fit_scale(gpu.config.width, gpu.config.height, slot.tex.w, slot.tex.h),
                offset: [offset / 100.0 * 2.0, 0.0],
            };
            gpu.queue
                .write_buffer(&slot.uniform, 0, bytemuck::bytes_of(&params));
        }

        let overlay_verts = gpu.layout.build_vertices(&frame_model);
        let overlay_vbuf = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("overlay-vertices"),
                contents: bytemuck::cast_slice(&overlay_verts),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let view = surface_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("carousel-encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("carousel-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&gpu.slide_pipeline);
            rpass.set_vertex_buffer(0, gpu.vbuf.slice(..));
            for (slot, offset) in gpu.slots.iter().zip(&frame_model.offsets) {
                // Anything beyond the immediate neighbors is fully
                // off-screen; skip the draw.
                if offset.abs() > 100.0 {
                    continue;
                }
                rpass.set_bind_group(0, &slot.bind_group, &[]);
                rpass.draw(0..4, 0..1);
            }

            rpass.set_pipeline(&gpu.overlay_pipeline);
            rpass.set_vertex_buffer(0, overlay_vbuf.slice(..));
            rpass.draw(0..overlay_verts.len() as u32, 0..1);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_frame.present();
        self.pending_redraw = false;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default().with_title(self.cfg.window_title.clone());
            match event_loop.create_window(attrs) {
                Ok(window) => self.window = Some(Arc::new(window)),
                Err(err) => {
                    error!(error = %err, "failed to create viewer window");
                    event_loop.exit();
                    return;
                }
            }
        }
        if self.gpu.is_none() {
            if let Some(window) = self.window.clone() {
                if let Err(err) = self.init_gpu(window) {
                    error!(error = ?err, "failed to initialize GPU state");
                    event_loop.exit();
                    return;
                }
            }
        }
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("viewer window close requested");
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size.width, new_size.height);
                }
                self.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::ArrowLeft) => {
                        self.dispatch(ControlAction::Nav(NavDirection::Prev));
                    }
                    PhysicalKey::Code(KeyCode::ArrowRight) => {
                        self.dispatch(ControlAction::Nav(NavDirection::Next));
                    }
                    PhysicalKey::Code(KeyCode::Escape | KeyCode::KeyQ) => {
                        self.shutdown(event_loop);
                    }
                    _ => {}
                }
            }
            WindowEvent::CursorEntered { .. } => {
                self.carousel.on_pointer_enter();
            }
            WindowEvent::CursorLeft { .. } => {
                self.carousel.on_pointer_leave(Instant::now());
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.on_pointer_up();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                let nav = self
                    .gesture
                    .as_mut()
                    .and_then(|g| g.on_pointer_move(position.x as f32));
                if let Some(dir) = nav {
                    self.dispatch(ControlAction::Nav(dir));
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = (self.cursor.x as f32, self.cursor.y as f32);
                match state {
                    ElementState::Pressed => {
                        let hit = self.gpu.as_ref().and_then(|gpu| gpu.layout.hit(x, y));
                        match hit {
                            Some(action) => self.dispatch(action),
                            None => {
                                if let Some(gesture) = self.gesture.as_mut() {
                                    gesture.on_pointer_down(x);
                                }
                            }
                        }
                    }
                    ElementState::Released => {
                        if let Some(gesture) = self.gesture.as_mut() {
                            gesture.on_pointer_up();
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.draw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        while let Ok(prepared) = self.rx_res.try_recv() {
            if let Some(gpu) = self.gpu.as_mut() {
                gpu.install_slide(prepared);
                self.pending_redraw = true;
            }
        }

        if self.carousel.on_tick(Instant::now()) {
            self.pending_redraw = true;
        }

        match self.carousel.deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }

        if self.pending_redraw {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
    }
}

fn make_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniform: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("slide-bind-group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: uniform.as_entire_binding(),
            },
        ],
    })
}

fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    pixels: &[u8],
    w: u32,
    h: u32,
) -> Tex {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("slide"),
        size: wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        tex.as_image_copy(),
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * w),
            rows_per_image: Some(h),
        },
        wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 1,
        },
    );
    Tex {
        view: tex.create_view(&wgpu::TextureViewDescriptor::default()),
        w,
        h,
    }
}

// Letterbox ("contain") fit of the image inside the surface, as a scale on
// the full-screen quad.
#[allow(clippy::cast_precision_loss)]
fn fit_scale(win_w: u32, win_h: u32, img_w: u32, img_h: u32) -> [f32; 2] {
    let ww = win_w.max(1) as f32;
    let wh = win_h.max(1) as f32;
    let iw = img_w.max(1) as f32;
    let ih = img_h.max(1) as f32;

    let win_ar = ww / wh;
    let img_ar = iw / ih;

    if img_ar > win_ar {
        [1.0, win_ar / img_ar]
    } else {
        [img_ar / win_ar, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_scale_letterboxes_wide_images() {
        let [sx, sy] = fit_scale(1000, 1000, 2000, 1000);
        assert!((sx - 1.0).abs() < f32::EPSILON);
        assert!((sy - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn fit_scale_pillarboxes_tall_images() {
        let [sx, sy] = fit_scale(1000, 1000, 500, 1000);
        assert!((sx - 0.5).abs() < f32::EPSILON);
        assert!((sy - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fit_scale_is_identity_for_matching_aspect() {
        assert_eq!(fit_scale(1920, 1080, 3840, 2160), [1.0, 1.0]);
    }
}
